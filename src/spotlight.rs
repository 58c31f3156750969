//! Spotlight geometry and the page-transition choreography of the classic layout.
//!
//! A transition is a list of timed [`Step`]s applied to a [`Stage`]. Every run
//! takes a fresh ticket from the [`Sequencer`]; steps holding a stale ticket are
//! dropped, so a second click cancels whatever remains of the first one.

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

/// Left edge of the spotlight's base before it is aimed at anything.
pub const START_LEFT_X: f64 = 100.0;
/// Right edge of the spotlight's base before it is aimed at anything.
pub const START_RIGHT_X: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    About,
    Gallery,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::About, Page::Gallery, Page::Contact];
    pub const DEFAULT: Page = Page::Contact;

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::About => "about",
            Page::Gallery => "gallery",
            Page::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::About => "About",
            Page::Gallery => "Gallery",
            Page::Contact => "Contact",
        }
    }

    /// Page named by a URL fragment, with or without the leading `#`.
    pub fn from_fragment(fragment: &str) -> Page {
        let name = fragment.strip_prefix('#').unwrap_or(fragment);
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .unwrap_or(Page::DEFAULT)
    }

    pub fn index(&self) -> usize {
        match self {
            Page::About => 0,
            Page::Gallery => 1,
            Page::Contact => 2,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout metrics of a menu button, as the browser reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementBox {
    pub offset_top: f64,
    pub offset_left: f64,
    pub client_width: f64,
    pub client_height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerBox {
    pub width: f64,
    pub height: f64,
}

pub type CssVars = Vec<(&'static str, String)>;

fn push_nonzero(vars: &mut CssVars, name: &'static str, value: f64, unit: &str) {
    if value != 0.0 && value.is_finite() {
        vars.push((name, format!("{value}{unit}")));
    }
}

/// Trapezoid from the bottom of the page up to the aimed button, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpotlightGeometry {
    pub height: Option<f64>,
    pub width_top: f64,
    pub width_bottom: f64,
    pub top: f64,
    pub top_left_x: f64,
    pub bottom_left_x: f64,
}

impl SpotlightGeometry {
    pub fn aimed_at(button: &ElementBox) -> Self {
        Self {
            height: None,
            width_top: button.client_width,
            width_bottom: START_RIGHT_X - START_LEFT_X,
            top: button.offset_top + button.client_height,
            top_left_x: button.offset_left,
            bottom_left_x: START_LEFT_X,
        }
    }

    /// Custom properties for the spotlight container. Zero values are left unset.
    pub fn css_vars(&self) -> CssVars {
        let mut vars = Vec::with_capacity(6);
        if let Some(height) = self.height {
            push_nonzero(&mut vars, "--height", height, "px");
        }
        push_nonzero(&mut vars, "--width-top", self.width_top, "px");
        push_nonzero(&mut vars, "--width-bottom", self.width_bottom, "px");
        push_nonzero(&mut vars, "--from-top", self.top, "px");
        push_nonzero(&mut vars, "--top-left-x", self.top_left_x, "px");
        push_nonzero(&mut vars, "--bottom-left-x", self.bottom_left_x, "px");
        vars
    }
}

/// Glow under the spotlight, positioned relative to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BeamGeometry {
    pub source_width: f64,
    pub source_y: f64,
    pub left_triangle_width: f64,
}

impl BeamGeometry {
    pub fn aimed_at(button: &ElementBox, container: &ContainerBox) -> Self {
        let percent = |value: f64, total: f64| {
            if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            }
        };
        Self {
            source_width: button.client_width,
            source_y: percent(button.offset_top + button.client_height, container.height),
            left_triangle_width: percent(button.offset_left, container.width),
        }
    }

    pub fn css_vars(&self) -> CssVars {
        let mut vars = Vec::with_capacity(3);
        push_nonzero(&mut vars, "--spotlight-source-width", self.source_width, "px");
        push_nonzero(
            &mut vars,
            "--spotlight-left-triangle-width",
            self.left_triangle_width,
            "vw",
        );
        push_nonzero(&mut vars, "--spotlight-sourcey", self.source_y, "vh");
        vars
    }
}

/// Render custom properties as an inline `style` value.
pub fn inline_style(vars: &[(&'static str, String)]) -> String {
    vars.iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Leaving,
    Transitioning,
    Arriving,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Leaving => "leaving",
            Phase::Transitioning => "transitioning",
            Phase::Arriving => "arriving",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Point the spotlight at a page's menu button.
    Aim(Page),
    StartSpotlight,
    RevealContent,
    HideSpotlight,
    /// Push every visible panel except the target outside.
    Leave(Page),
    /// Hide every other panel and unhide the target, still outside.
    Swap(Page),
    /// Slide the target in.
    Arrive(Page),
    Settle,
}

/// A cue fired `at` after its sequence started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub at: Duration,
    pub phase: Phase,
    pub cue: Cue,
}

impl Step {
    fn new(at: Duration, phase: Phase, cue: Cue) -> Self {
        Self { at, phase, cue }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choreography {
    pub beam_travel: Duration,
    pub beam_fade: Duration,
    pub slide: Duration,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            beam_travel: Duration::from_secs(2),
            beam_fade: Duration::from_secs(1),
            slide: Duration::from_secs(1),
        }
    }
}

impl Choreography {
    /// First paint: sweep the spotlight onto `page`, reveal the content, then show the page.
    pub fn opening(&self, page: Page) -> Vec<Step> {
        let revealed = self.beam_travel;
        let faded = revealed + self.beam_fade;
        let arrived = faded + self.slide;
        vec![
            Step::new(Duration::ZERO, Phase::Transitioning, Cue::Aim(page)),
            Step::new(Duration::ZERO, Phase::Transitioning, Cue::StartSpotlight),
            Step::new(revealed, Phase::Transitioning, Cue::RevealContent),
            Step::new(faded, Phase::Transitioning, Cue::HideSpotlight),
            Step::new(faded, Phase::Arriving, Cue::Swap(page)),
            Step::new(arrived, Phase::Arriving, Cue::Arrive(page)),
            Step::new(arrived + self.slide, Phase::Idle, Cue::Settle),
        ]
    }

    /// Move from whatever is showing to `to`. Finishes the opening reveal if
    /// a click cut it short.
    pub fn transition(&self, to: Page) -> Vec<Step> {
        let swapped = self.slide;
        let arrived = swapped + self.slide;
        vec![
            Step::new(Duration::ZERO, Phase::Leaving, Cue::RevealContent),
            Step::new(Duration::ZERO, Phase::Leaving, Cue::HideSpotlight),
            Step::new(Duration::ZERO, Phase::Leaving, Cue::Leave(to)),
            Step::new(swapped, Phase::Transitioning, Cue::Swap(to)),
            Step::new(arrived, Phase::Arriving, Cue::Arrive(to)),
            Step::new(arrived + self.slide, Phase::Idle, Cue::Settle),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub hidden: bool,
    pub outside: bool,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            hidden: true,
            outside: true,
        }
    }
}

/// What the classic layout currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub phase: Phase,
    pub aimed_at: Option<Page>,
    pub spotlight_animating: bool,
    pub spotlight_hidden: bool,
    pub content_hidden: bool,
    panels: [Panel; 3],
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            aimed_at: None,
            spotlight_animating: false,
            spotlight_hidden: false,
            content_hidden: true,
            panels: [Panel::default(); 3],
        }
    }
}

impl Stage {
    pub fn panel(&self, page: Page) -> Panel {
        self.panels[page.index()]
    }

    pub fn visible_pages(&self) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|p| !self.panel(*p).hidden)
            .collect()
    }

    pub fn apply(&mut self, step: &Step) {
        self.phase = step.phase;
        match step.cue {
            Cue::Aim(page) => self.aimed_at = Some(page),
            Cue::StartSpotlight => self.spotlight_animating = true,
            Cue::RevealContent => self.content_hidden = false,
            Cue::HideSpotlight => self.spotlight_hidden = true,
            Cue::Leave(to) => {
                for page in Page::ALL.into_iter().filter(|p| *p != to) {
                    let panel = &mut self.panels[page.index()];
                    if !panel.hidden {
                        panel.outside = true;
                    }
                }
            }
            Cue::Swap(to) => {
                for page in Page::ALL {
                    let panel = &mut self.panels[page.index()];
                    if page == to {
                        panel.hidden = false;
                    } else {
                        *panel = Panel::default();
                    }
                }
            }
            Cue::Arrive(to) => {
                self.panels[to.index()] = Panel {
                    hidden: false,
                    outside: false,
                };
            }
            Cue::Settle => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Cancellation token shared by every scheduled step.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    generation: Arc<AtomicU64>,
}

impl Sequencer {
    /// Start a new run, invalidating every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Schedule `steps` with `timer`. Steps at zero fire immediately.
    pub fn run<T, A>(&self, steps: Vec<Step>, timer: T, apply: A) -> Ticket
    where
        T: Fn(Duration, Box<dyn FnOnce()>),
        A: Fn(&Step) + Clone + 'static,
    {
        let ticket = self.begin();
        for step in steps {
            let sequencer = self.clone();
            let apply = apply.clone();
            let fire = move || {
                if sequencer.is_current(ticket) {
                    apply(&step);
                }
            };
            if step.at.is_zero() {
                fire();
            } else {
                timer(step.at, Box::new(fire));
            }
        }
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    type Pending = Rc<RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>>;

    /// Fake timer keyed on an absolute clock.
    struct Clock {
        now: Rc<RefCell<Duration>>,
        pending: Pending,
    }

    impl Clock {
        fn new() -> Self {
            Self {
                now: Rc::new(RefCell::new(Duration::ZERO)),
                pending: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn timer(&self) -> impl Fn(Duration, Box<dyn FnOnce()>) {
            let now = self.now.clone();
            let pending = self.pending.clone();
            move |after, f| {
                let at = *now.borrow() + after;
                pending.borrow_mut().push((at, f));
            }
        }

        fn advance_to(&self, until: Duration) {
            loop {
                let next = {
                    let mut pending = self.pending.borrow_mut();
                    pending.sort_by_key(|(at, _)| *at);
                    if pending.first().is_some_and(|(at, _)| *at <= until) {
                        Some(pending.remove(0))
                    } else {
                        None
                    }
                };
                match next {
                    Some((at, f)) => {
                        *self.now.borrow_mut() = at;
                        f();
                    }
                    None => break,
                }
            }
            *self.now.borrow_mut() = until;
        }
    }

    fn applier(stage: &Rc<RefCell<Stage>>) -> impl Fn(&Step) + Clone + 'static {
        let stage = stage.clone();
        move |step: &Step| stage.borrow_mut().apply(step)
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_fragment_falls_back_to_default() {
        assert_eq!(Page::from_fragment("#gallery"), Page::Gallery);
        assert_eq!(Page::from_fragment("about"), Page::About);
        assert_eq!(Page::from_fragment(""), Page::Contact);
        assert_eq!(Page::from_fragment("#nowhere"), Page::Contact);
    }

    #[test]
    fn test_spotlight_geometry() {
        let button = ElementBox {
            offset_top: 40.0,
            offset_left: 250.0,
            client_width: 120.0,
            client_height: 32.0,
        };
        let geometry = SpotlightGeometry::aimed_at(&button);
        assert_eq!(
            geometry.css_vars(),
            vec![
                ("--width-top", "120px".to_string()),
                ("--width-bottom", "400px".to_string()),
                ("--from-top", "72px".to_string()),
                ("--top-left-x", "250px".to_string()),
                ("--bottom-left-x", "100px".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_values_are_not_written() {
        let geometry = SpotlightGeometry::aimed_at(&ElementBox::default());
        let names: Vec<_> = geometry.css_vars().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["--width-bottom", "--bottom-left-x"]);

        let with_height = SpotlightGeometry {
            height: Some(300.0),
            ..geometry
        };
        assert_eq!(with_height.css_vars()[0], ("--height", "300px".to_string()));
    }

    #[test]
    fn test_beam_geometry_is_relative() {
        let button = ElementBox {
            offset_top: 150.0,
            offset_left: 200.0,
            client_width: 80.0,
            client_height: 50.0,
        };
        let container = ContainerBox {
            width: 1000.0,
            height: 800.0,
        };
        let beam = BeamGeometry::aimed_at(&button, &container);
        assert_eq!(
            inline_style(&beam.css_vars()),
            "--spotlight-source-width: 80px; --spotlight-left-triangle-width: 20vw; --spotlight-sourcey: 25vh;"
        );

        // an unmeasured container never divides by zero
        let beam = BeamGeometry::aimed_at(&button, &ContainerBox::default());
        assert_eq!(beam.css_vars().len(), 1);
    }

    #[test]
    fn test_opening_reveals_default_page() {
        let clock = Clock::new();
        let stage = Rc::new(RefCell::new(Stage::default()));
        let sequencer = Sequencer::default();
        sequencer.run(
            Choreography::default().opening(Page::DEFAULT),
            clock.timer(),
            applier(&stage),
        );

        {
            let stage = stage.borrow();
            assert_eq!(stage.aimed_at, Some(Page::Contact));
            assert!(stage.spotlight_animating);
            assert!(stage.content_hidden);
        }

        clock.advance_to(secs(2.0));
        assert!(!stage.borrow().content_hidden);
        assert!(!stage.borrow().spotlight_hidden);

        clock.advance_to(secs(3.0));
        assert!(stage.borrow().spotlight_hidden);
        assert_eq!(stage.borrow().visible_pages(), vec![Page::Contact]);
        assert!(stage.borrow().panel(Page::Contact).outside);

        clock.advance_to(secs(10.0));
        let stage = stage.borrow();
        assert_eq!(stage.phase, Phase::Idle);
        assert_eq!(
            stage.panel(Page::Contact),
            Panel {
                hidden: false,
                outside: false
            }
        );
    }

    #[test]
    fn test_transition_phases_in_order() {
        let clock = Clock::new();
        let stage = Rc::new(RefCell::new(Stage::default()));
        stage.borrow_mut().apply(&Step::new(
            Duration::ZERO,
            Phase::Idle,
            Cue::Arrive(Page::Contact),
        ));
        let sequencer = Sequencer::default();
        sequencer.run(
            Choreography::default().transition(Page::Gallery),
            clock.timer(),
            applier(&stage),
        );

        assert_eq!(stage.borrow().phase, Phase::Leaving);
        assert!(stage.borrow().panel(Page::Contact).outside);
        assert!(!stage.borrow().panel(Page::Contact).hidden);

        clock.advance_to(secs(1.0));
        assert_eq!(stage.borrow().phase, Phase::Transitioning);
        assert_eq!(stage.borrow().visible_pages(), vec![Page::Gallery]);

        clock.advance_to(secs(2.0));
        assert_eq!(stage.borrow().phase, Phase::Arriving);
        assert!(!stage.borrow().panel(Page::Gallery).outside);

        clock.advance_to(secs(3.0));
        assert_eq!(stage.borrow().phase, Phase::Idle);
    }

    #[test]
    fn test_second_click_cancels_first() {
        let clock = Clock::new();
        let stage = Rc::new(RefCell::new(Stage::default()));
        stage.borrow_mut().apply(&Step::new(
            Duration::ZERO,
            Phase::Idle,
            Cue::Arrive(Page::Contact),
        ));
        let sequencer = Sequencer::default();
        let choreography = Choreography::default();

        let first = sequencer.run(
            choreography.transition(Page::Gallery),
            clock.timer(),
            applier(&stage),
        );
        clock.advance_to(secs(0.5));
        let second = sequencer.run(
            choreography.transition(Page::About),
            clock.timer(),
            applier(&stage),
        );
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));

        clock.advance_to(secs(10.0));
        let stage = stage.borrow();
        // gallery never showed up and contact was cleaned away
        assert_eq!(stage.visible_pages(), vec![Page::About]);
        assert!(!stage.panel(Page::About).outside);
        assert_eq!(stage.panel(Page::Gallery), Panel::default());
        assert_eq!(stage.panel(Page::Contact), Panel::default());
        assert_eq!(stage.phase, Phase::Idle);
    }

    #[test]
    fn test_click_during_opening_still_reveals() {
        let clock = Clock::new();
        let stage = Rc::new(RefCell::new(Stage::default()));
        let sequencer = Sequencer::default();
        let choreography = Choreography::default();

        sequencer.run(
            choreography.opening(Page::Contact),
            clock.timer(),
            applier(&stage),
        );
        clock.advance_to(secs(0.5));
        sequencer.run(
            choreography.transition(Page::Gallery),
            clock.timer(),
            applier(&stage),
        );
        clock.advance_to(secs(30.0));

        let stage = stage.borrow();
        assert!(!stage.content_hidden);
        assert!(stage.spotlight_hidden);
        assert_eq!(stage.visible_pages(), vec![Page::Gallery]);
        assert!(!stage.panel(Page::Gallery).outside);
        assert_eq!(stage.phase, Phase::Idle);
    }

    #[test]
    fn test_cancel_drops_pending_steps() {
        let clock = Clock::new();
        let stage = Rc::new(RefCell::new(Stage::default()));
        let sequencer = Sequencer::default();
        sequencer.run(
            Choreography::default().opening(Page::About),
            clock.timer(),
            applier(&stage),
        );
        sequencer.cancel();
        clock.advance_to(secs(10.0));

        let stage = stage.borrow();
        assert!(stage.content_hidden);
        assert!(stage.visible_pages().is_empty());
    }
}
