//! Navigation control descriptors and their enablement snapshots.
//!
//! The control set is rebuilt wholesale from `(current_page, page_count)`
//! after every transition instead of being patched in place.

/// One interactive control attached to a paginated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    First,
    Previous,
    Label,
    Next,
    Last,
    Stop,
}

/// What activating a control asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Navigate(Target),
    /// Display-only.
    Label,
    Stop,
}

/// Navigation target relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    First,
    Last,
    Offset(isize),
}

impl Target {
    /// Resolve the 0-based target page, or `None` when it falls outside
    /// `0..page_count`.
    pub fn resolve(self, current_page: usize, page_count: usize) -> Option<usize> {
        let target = match self {
            Self::First => Some(0),
            Self::Last => page_count.checked_sub(1),
            Self::Offset(delta) => current_page.checked_add_signed(delta),
        }?;

        (target < page_count).then_some(target)
    }
}

const SINGLE_PAGE: &[ControlKind] = &[ControlKind::Label, ControlKind::Stop];
const TWO_PAGES: &[ControlKind] = &[
    ControlKind::Previous,
    ControlKind::Label,
    ControlKind::Next,
    ControlKind::Stop,
];
const MANY_PAGES: &[ControlKind] = &[
    ControlKind::First,
    ControlKind::Previous,
    ControlKind::Label,
    ControlKind::Next,
    ControlKind::Last,
    ControlKind::Stop,
];

impl ControlKind {
    pub const ALL: [ControlKind; 6] = [
        Self::First,
        Self::Previous,
        Self::Label,
        Self::Next,
        Self::Last,
        Self::Stop,
    ];

    /// Stable name used in custom ids and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "previous",
            Self::Label => "label",
            Self::Next => "next",
            Self::Last => "last",
            Self::Stop => "stop",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn action(self) -> ControlAction {
        match self {
            Self::First => ControlAction::Navigate(Target::First),
            Self::Previous => ControlAction::Navigate(Target::Offset(-1)),
            Self::Label => ControlAction::Label,
            Self::Next => ControlAction::Navigate(Target::Offset(1)),
            Self::Last => ControlAction::Navigate(Target::Last),
            Self::Stop => ControlAction::Stop,
        }
    }

    /// Unicode emoji shown on the control, if it has one.
    pub fn emoji(self) -> Option<&'static str> {
        match self {
            Self::First => Some("\u{23EE}"),
            Self::Previous => Some("\u{25C0}"),
            Self::Label => None,
            Self::Next => Some("\u{25B6}"),
            Self::Last => Some("\u{23ED}"),
            Self::Stop => Some("\u{23F9}"),
        }
    }

    /// Controls present for a given page count, in display order.
    pub fn layout(page_count: usize) -> &'static [ControlKind] {
        match page_count {
            0 | 1 => SINGLE_PAGE,
            2 => TWO_PAGES,
            _ => MANY_PAGES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub enabled: bool,
    pub label: Option<String>,
}

impl Control {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Ordered snapshot of every control attached to a session's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSet {
    controls: Vec<Control>,
}

impl ControlSet {
    /// Derive the control states for `current_page` (0-based) of `page_count`.
    pub fn snapshot(current_page: usize, page_count: usize) -> Self {
        let page_count = page_count.max(1);
        let at_start = current_page == 0;
        let at_end = current_page + 1 >= page_count;

        let controls = ControlKind::layout(page_count)
            .iter()
            .map(|&kind| {
                let (enabled, label) = match kind {
                    ControlKind::First | ControlKind::Previous => (!at_start, None),
                    ControlKind::Next | ControlKind::Last => (!at_end, None),
                    ControlKind::Label => {
                        (false, Some(format!("{}/{}", current_page + 1, page_count)))
                    }
                    ControlKind::Stop => (true, None),
                };

                Control {
                    kind,
                    enabled,
                    label,
                }
            })
            .collect();

        Self { controls }
    }

    /// The same controls with every one of them disabled.
    pub fn disabled(mut self) -> Self {
        for control in &mut self.controls {
            control.enabled = false;
        }
        self
    }

    pub fn get(&self, kind: ControlKind) -> Option<&Control> {
        self.controls.iter().find(|control| control.kind == kind)
    }

    pub fn is_enabled(&self, kind: ControlKind) -> bool {
        self.get(kind).is_some_and(|control| control.enabled)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    pub fn kinds(&self) -> Vec<ControlKind> {
        self.controls.iter().map(|control| control.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(set: &ControlSet) -> Option<&str> {
        set.get(ControlKind::Label)?.label.as_deref()
    }

    #[test]
    fn layout_depends_on_page_count() {
        assert_eq!(
            ControlSet::snapshot(0, 1).kinds(),
            vec![ControlKind::Label, ControlKind::Stop]
        );
        assert_eq!(
            ControlSet::snapshot(0, 2).kinds(),
            vec![
                ControlKind::Previous,
                ControlKind::Label,
                ControlKind::Next,
                ControlKind::Stop
            ]
        );
        assert_eq!(ControlSet::snapshot(0, 7).kinds(), MANY_PAGES.to_vec());
    }

    #[test]
    fn first_page_disables_backwards_controls() {
        let set = ControlSet::snapshot(0, 4);

        assert_eq!(label(&set), Some("1/4"));
        assert!(!set.is_enabled(ControlKind::First));
        assert!(!set.is_enabled(ControlKind::Previous));
        assert!(set.is_enabled(ControlKind::Next));
        assert!(set.is_enabled(ControlKind::Last));
        assert!(set.is_enabled(ControlKind::Stop));
    }

    #[test]
    fn last_page_disables_forward_controls() {
        let set = ControlSet::snapshot(3, 4);

        assert_eq!(label(&set), Some("4/4"));
        assert!(set.is_enabled(ControlKind::First));
        assert!(set.is_enabled(ControlKind::Previous));
        assert!(!set.is_enabled(ControlKind::Next));
        assert!(!set.is_enabled(ControlKind::Last));
    }

    #[test]
    fn enablement_tracks_boundaries_for_every_page() {
        for page_count in 1..=6 {
            for current in 0..page_count {
                let set = ControlSet::snapshot(current, page_count);
                let backwards = current != 0;
                let forwards = current != page_count - 1;

                if page_count >= 2 {
                    assert_eq!(set.is_enabled(ControlKind::Previous), backwards);
                    assert_eq!(set.is_enabled(ControlKind::Next), forwards);
                }
                if page_count >= 3 {
                    assert_eq!(set.is_enabled(ControlKind::First), backwards);
                    assert_eq!(set.is_enabled(ControlKind::Last), forwards);
                }
                assert!(set.is_enabled(ControlKind::Stop));
            }
        }
    }

    #[test]
    fn disabled_keeps_shape_and_labels() {
        let set = ControlSet::snapshot(1, 3).disabled();

        assert_eq!(set.len(), 6);
        assert!(set.iter().all(|control| !control.enabled));
        assert_eq!(label(&set), Some("2/3"));
    }

    #[test]
    fn targets_outside_range_resolve_to_none() {
        assert_eq!(Target::Offset(-1).resolve(0, 4), None);
        assert_eq!(Target::Offset(1).resolve(3, 4), None);
        assert_eq!(Target::Offset(1).resolve(1, 4), Some(2));
        assert_eq!(Target::First.resolve(2, 4), Some(0));
        assert_eq!(Target::Last.resolve(0, 4), Some(3));
    }

    #[test]
    fn names_round_trip_through_lookup() {
        assert_eq!(ControlKind::from_name("previous"), Some(ControlKind::Previous));
        assert_eq!(ControlKind::from_name("jump"), None);
    }
}
