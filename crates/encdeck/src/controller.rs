use eframe::egui::Key;

/// Navigation commands, issued by key presses or chrome clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
    ToggleOverview,
    TogglePresenter,
    DismissOverlays,
}

/// Keys the deck reacts to. The app polls exactly these each frame.
pub const MAPPED_KEYS: [Key; 8] = [
    Key::ArrowRight,
    Key::Space,
    Key::ArrowLeft,
    Key::Home,
    Key::End,
    Key::O,
    Key::P,
    Key::Escape,
];

/// Commands for one frame of input. A focused text widget swallows every
/// deck key, so the whole frame yields nothing while one is active.
pub fn commands_for_frame(text_focus: bool, pressed: &[Key]) -> Vec<Command> {
    if text_focus {
        return Vec::new();
    }
    pressed.iter().filter_map(|k| command_for_key(*k)).collect()
}

/// Key to command mapping. Unmapped keys yield nothing.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::ArrowRight | Key::Space => Some(Command::Next),
        Key::ArrowLeft => Some(Command::Previous),
        Key::Home => Some(Command::First),
        Key::End => Some(Command::Last),
        Key::O => Some(Command::ToggleOverview),
        Key::P => Some(Command::TogglePresenter),
        Key::Escape => Some(Command::DismissOverlays),
        _ => None,
    }
}

/// Navigation state for one viewing session. The index is always a valid
/// position in the deck; every setter clamps rather than fails.
#[derive(Debug, Clone)]
pub struct NavState {
    slide_count: usize,
    pub index: usize,
    pub overview: bool,
    pub presenter: bool,
}

impl NavState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            index: 0,
            overview: false,
            presenter: false,
        }
    }

    pub fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// Move by `delta` slides, saturating at both ends.
    pub fn advance(&mut self, delta: isize) {
        let last = self.last_index() as isize;
        self.index = (self.index as isize).saturating_add(delta).clamp(0, last) as usize;
    }

    /// Jump directly to a slide. Out-of-range targets clamp to the last
    /// slide rather than leaving the valid range.
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.last_index());
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.last_index();
    }

    pub fn toggle_overview(&mut self) {
        self.overview = !self.overview;
    }

    pub fn toggle_presenter(&mut self) {
        self.presenter = !self.presenter;
    }

    pub fn dismiss_overlays(&mut self) {
        self.overview = false;
        self.presenter = false;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.advance(1),
            Command::Previous => self.advance(-1),
            Command::First => self.first(),
            Command::Last => self.last(),
            Command::GoTo(i) => self.go_to(i),
            Command::ToggleOverview => self.toggle_overview(),
            Command::TogglePresenter => self.toggle_presenter(),
            Command::DismissOverlays => self.dismiss_overlays(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK_LEN: usize = 22;

    #[test]
    fn test_advance_stays_in_range() {
        let mut nav = NavState::new(DECK_LEN);
        for delta in [-100, -3, -1, 0, 1, 3, 7, 100, isize::MAX / 2] {
            nav.advance(delta);
            assert!(nav.index <= nav.last_index(), "delta {delta} escaped range");
        }
    }

    #[test]
    fn test_advance_saturates_at_boundaries() {
        let mut nav = NavState::new(DECK_LEN);
        nav.advance(-1);
        assert_eq!(nav.index, 0);
        nav.last();
        nav.advance(1);
        assert_eq!(nav.index, DECK_LEN - 1);
    }

    #[test]
    fn test_first_then_last() {
        for start in [0, 5, DECK_LEN - 1] {
            let mut nav = NavState::new(DECK_LEN);
            nav.go_to(start);
            nav.first();
            assert_eq!(nav.index, 0);
            nav.last();
            assert_eq!(nav.index, DECK_LEN - 1);
        }
    }

    #[test]
    fn test_go_to_clamps_out_of_range() {
        let mut nav = NavState::new(DECK_LEN);
        nav.go_to(usize::MAX);
        assert_eq!(nav.index, DECK_LEN - 1);
        nav.go_to(3);
        assert_eq!(nav.index, 3);
    }

    #[test]
    fn test_toggle_overview_round_trips() {
        let mut nav = NavState::new(DECK_LEN);
        let before = nav.overview;
        nav.toggle_overview();
        nav.toggle_overview();
        assert_eq!(nav.overview, before);
    }

    #[test]
    fn test_toggle_presenter_round_trips() {
        let mut nav = NavState::new(DECK_LEN);
        nav.toggle_presenter();
        assert!(nav.presenter);
        nav.toggle_presenter();
        assert!(!nav.presenter);
    }

    #[test]
    fn test_dismiss_overlays_from_any_state() {
        for (overview, presenter) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut nav = NavState::new(DECK_LEN);
            nav.overview = overview;
            nav.presenter = presenter;
            nav.dismiss_overlays();
            assert!(!nav.overview);
            assert!(!nav.presenter);
        }
    }

    #[test]
    fn test_keyboard_walkthrough() {
        // 18 document pages + 4 content slides, driven entirely by keys.
        let mut nav = NavState::new(DECK_LEN);

        nav.apply(command_for_key(Key::End).unwrap());
        nav.apply(command_for_key(Key::Home).unwrap());
        assert_eq!(nav.index, 0);

        for _ in 0..21 {
            nav.apply(command_for_key(Key::ArrowRight).unwrap());
        }
        assert_eq!(nav.index, 21);

        // One more press past the end stays put.
        nav.apply(command_for_key(Key::ArrowRight).unwrap());
        assert_eq!(nav.index, 21);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for_key(Key::ArrowRight), Some(Command::Next));
        assert_eq!(command_for_key(Key::Space), Some(Command::Next));
        assert_eq!(command_for_key(Key::ArrowLeft), Some(Command::Previous));
        assert_eq!(command_for_key(Key::Home), Some(Command::First));
        assert_eq!(command_for_key(Key::End), Some(Command::Last));
        assert_eq!(command_for_key(Key::O), Some(Command::ToggleOverview));
        assert_eq!(command_for_key(Key::P), Some(Command::TogglePresenter));
        assert_eq!(command_for_key(Key::Escape), Some(Command::DismissOverlays));
        assert_eq!(command_for_key(Key::A), None);
        assert_eq!(command_for_key(Key::Enter), None);
        assert_eq!(command_for_key(Key::ArrowUp), None);
    }

    #[test]
    fn test_text_focus_swallows_mapped_keys() {
        // Typing in a text field must not navigate the deck.
        let mut nav = NavState::new(DECK_LEN);
        nav.go_to(4);
        nav.toggle_presenter();
        let before = nav.clone();

        for cmd in commands_for_frame(true, &[Key::ArrowRight, Key::Escape, Key::O]) {
            nav.apply(cmd);
        }
        assert_eq!(nav.index, before.index);
        assert_eq!(nav.overview, before.overview);
        assert_eq!(nav.presenter, before.presenter);

        // Same keys act once focus leaves the field
        for cmd in commands_for_frame(false, &[Key::ArrowRight]) {
            nav.apply(cmd);
        }
        assert_eq!(nav.index, 5);
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let mut nav = NavState::new(DECK_LEN);
        nav.advance(isize::MAX);
        assert_eq!(nav.index, DECK_LEN - 1);
        nav.advance(isize::MIN);
        assert_eq!(nav.index, 0);
    }

    #[test]
    fn test_mapped_keys_cover_the_table() {
        for key in MAPPED_KEYS {
            assert!(command_for_key(key).is_some(), "{key:?} listed but unmapped");
        }
    }

    #[test]
    fn test_single_slide_deck() {
        let mut nav = NavState::new(1);
        nav.advance(1);
        assert_eq!(nav.index, 0);
        nav.last();
        assert_eq!(nav.index, 0);
    }
}
