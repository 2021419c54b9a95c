//! Screen registry and active-screen tracking

use crate::error::AppError;
use crate::model::{ScreenName, ScreenPayload, TrackRecord};
use crate::screen::{ResultScreen, Screen, SearchScreen};

/// Builds a screen from the payload of its first navigation
pub type ScreenFactory = Box<dyn Fn(ScreenPayload) -> Result<Box<dyn Screen>, AppError>>;

struct ScreenSlot {
    name: ScreenName,
    factory: ScreenFactory,
    /// Index into `ScreenController::live` once created
    live: Option<usize>,
}

/// Decides which screen is visible and delivers payloads to screens.
///
/// The registry is fixed at construction. Screens are created on first
/// navigation, kept in creation order and never dropped.
pub struct ScreenController {
    slots: Vec<ScreenSlot>,
    live: Vec<Box<dyn Screen>>,
    active: usize,
}

impl ScreenController {
    /// Creates and activates `initial` before returning.
    pub fn new(
        registry: Vec<(ScreenName, ScreenFactory)>,
        initial: ScreenName,
    ) -> Result<Self, AppError> {
        let slots = registry
            .into_iter()
            .map(|(name, factory)| ScreenSlot {
                name,
                factory,
                live: None,
            })
            .collect();

        let mut controller = Self {
            slots,
            live: Vec::new(),
            active: 0,
        };
        controller.navigate(initial, ScreenPayload::None)?;
        Ok(controller)
    }

    /// Search form first, results created on the first successful search
    pub fn with_default_screens(page_size: usize) -> Result<Self, AppError> {
        let search: ScreenFactory = Box::new(|_: ScreenPayload| {
            Ok(Box::new(SearchScreen::new()) as Box<dyn Screen>)
        });
        let results: ScreenFactory = Box::new(move |payload: ScreenPayload| {
            let records: Vec<TrackRecord> = match payload {
                ScreenPayload::Tracks(records) => records,
                ScreenPayload::None => Vec::new(),
            };
            Ok(Box::new(ResultScreen::new(records, page_size)) as Box<dyn Screen>)
        });

        Self::new(
            vec![(ScreenName::Search, search), (ScreenName::Results, results)],
            ScreenName::Search,
        )
    }

    pub fn navigate(&mut self, name: ScreenName, payload: ScreenPayload) -> Result<(), AppError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.name == name)
            .ok_or_else(|| AppError::UnknownScreenFactory(name.to_string()))?;

        let index = match slot.live {
            Some(index) => {
                self.live[index].update(payload)?;
                index
            }
            None => {
                let screen = (slot.factory)(payload)?;
                self.live.push(screen);
                let index = self.live.len() - 1;
                slot.live = Some(index);
                tracing::debug!(screen = %name, "Screen created");
                index
            }
        };

        self.active = index;
        tracing::debug!(screen = %name, "Screen activated");
        Ok(())
    }

    pub fn navigate_by_name(&mut self, name: &str, payload: ScreenPayload) -> Result<(), AppError> {
        self.navigate(name.parse()?, payload)
    }

    pub fn update_active(&mut self, payload: ScreenPayload) -> Result<(), AppError> {
        self.live[self.active].update(payload)
    }

    pub fn active(&self) -> ScreenName {
        self.live[self.active].name()
    }

    pub fn active_screen(&self) -> &dyn Screen {
        self.live[self.active].as_ref()
    }

    pub fn active_screen_mut(&mut self) -> &mut dyn Screen {
        self.live[self.active].as_mut()
    }

    pub fn is_live(&self, name: ScreenName) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.name == name && slot.live.is_some())
    }

    /// Names of created screens, in creation order
    pub fn live_screens(&self) -> Vec<ScreenName> {
        self.live.iter().map(|screen| screen.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::fixtures::tracks;
    use crate::screen::{Command, ScreenInput, ScreenView};

    #[derive(Default)]
    struct Journal {
        created: Vec<(ScreenName, ScreenPayload)>,
        updated: Vec<(ScreenName, ScreenPayload)>,
    }

    struct ProbeScreen {
        name: ScreenName,
        journal: Rc<RefCell<Journal>>,
    }

    impl Screen for ProbeScreen {
        fn name(&self) -> ScreenName {
            self.name
        }

        fn update(&mut self, payload: ScreenPayload) -> Result<(), AppError> {
            self.journal.borrow_mut().updated.push((self.name, payload));
            Ok(())
        }

        fn handle_input(&mut self, _input: ScreenInput) -> Result<Option<Command>, AppError> {
            Ok(None)
        }

        fn view(&self) -> ScreenView<'_> {
            ScreenView::Search { query: "" }
        }
    }

    fn probe(name: ScreenName, journal: &Rc<RefCell<Journal>>) -> (ScreenName, ScreenFactory) {
        let journal = Rc::clone(journal);
        let factory: ScreenFactory = Box::new(move |payload: ScreenPayload| {
            journal.borrow_mut().created.push((name, payload));
            Ok(Box::new(ProbeScreen {
                name,
                journal: Rc::clone(&journal),
            }) as Box<dyn Screen>)
        });
        (name, factory)
    }

    fn probe_controller() -> (ScreenController, Rc<RefCell<Journal>>) {
        let journal = Rc::new(RefCell::new(Journal::default()));
        let controller = ScreenController::new(
            vec![
                probe(ScreenName::Search, &journal),
                probe(ScreenName::Results, &journal),
            ],
            ScreenName::Search,
        )
        .unwrap();
        (controller, journal)
    }

    #[test]
    fn initial_screen_is_created_and_active() {
        let (controller, journal) = probe_controller();

        assert_eq!(controller.active(), ScreenName::Search);
        assert_eq!(controller.live_screens(), vec![ScreenName::Search]);
        assert!(!controller.is_live(ScreenName::Results));
        assert_eq!(journal.borrow().created.len(), 1);
    }

    #[test]
    fn second_navigation_updates_instead_of_constructing() {
        let (mut controller, journal) = probe_controller();

        controller
            .navigate(ScreenName::Results, ScreenPayload::Tracks(tracks(3)))
            .unwrap();
        controller
            .navigate(ScreenName::Results, ScreenPayload::Tracks(tracks(5)))
            .unwrap();

        let journal = journal.borrow();
        let results_created: Vec<_> = journal
            .created
            .iter()
            .filter(|(name, _)| *name == ScreenName::Results)
            .collect();
        assert_eq!(results_created.len(), 1);
        assert_eq!(results_created[0].1, ScreenPayload::Tracks(tracks(3)));
        assert_eq!(
            journal.updated,
            vec![(ScreenName::Results, ScreenPayload::Tracks(tracks(5)))]
        );
        assert_eq!(controller.active(), ScreenName::Results);
    }

    #[test]
    fn activation_leaves_other_screens_alone() {
        let (mut controller, journal) = probe_controller();

        controller
            .navigate(ScreenName::Results, ScreenPayload::Tracks(tracks(3)))
            .unwrap();
        controller.navigate(ScreenName::Search, ScreenPayload::None).unwrap();

        assert_eq!(controller.active(), ScreenName::Search);
        assert_eq!(
            controller.live_screens(),
            vec![ScreenName::Search, ScreenName::Results]
        );
        // Only the revisited search screen saw an update
        assert_eq!(
            journal.borrow().updated,
            vec![(ScreenName::Search, ScreenPayload::None)]
        );
    }

    #[test]
    fn update_active_routes_to_active_screen() {
        let (mut controller, journal) = probe_controller();
        controller.navigate(ScreenName::Results, ScreenPayload::None).unwrap();

        controller
            .update_active(ScreenPayload::Tracks(tracks(1)))
            .unwrap();

        assert_eq!(
            journal.borrow().updated,
            vec![(ScreenName::Results, ScreenPayload::Tracks(tracks(1)))]
        );
    }

    #[test]
    fn unregistered_screen_fails_loudly() {
        let journal = Rc::new(RefCell::new(Journal::default()));
        let mut controller =
            ScreenController::new(vec![probe(ScreenName::Search, &journal)], ScreenName::Search)
                .unwrap();

        let err = controller
            .navigate(ScreenName::Results, ScreenPayload::None)
            .unwrap_err();

        assert!(matches!(err, AppError::UnknownScreenFactory(name) if name == "Results"));
        assert_eq!(controller.active(), ScreenName::Search);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let (mut controller, _) = probe_controller();
        let err = controller
            .navigate_by_name("Settings", ScreenPayload::None)
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownScreenFactory(name) if name == "Settings"));

        controller.navigate_by_name("Results", ScreenPayload::None).unwrap();
        assert_eq!(controller.active(), ScreenName::Results);
    }

    #[test]
    fn missing_initial_screen_is_an_error() {
        let result = ScreenController::new(Vec::new(), ScreenName::Search);
        assert!(matches!(result, Err(AppError::UnknownScreenFactory(_))));
    }

    #[test]
    fn factory_errors_propagate_unchanged() {
        let failing: ScreenFactory =
            Box::new(|_: ScreenPayload| -> Result<Box<dyn Screen>, AppError> {
                Err(AppError::EmptyResultSet)
            });
        let journal = Rc::new(RefCell::new(Journal::default()));
        let mut controller = ScreenController::new(
            vec![probe(ScreenName::Search, &journal), (ScreenName::Results, failing)],
            ScreenName::Search,
        )
        .unwrap();

        let err = controller
            .navigate(ScreenName::Results, ScreenPayload::None)
            .unwrap_err();

        assert!(matches!(err, AppError::EmptyResultSet));
        assert!(!controller.is_live(ScreenName::Results));
        assert_eq!(controller.active(), ScreenName::Search);
    }

    #[test]
    fn default_screens_repopulate_results() {
        let mut controller = ScreenController::with_default_screens(10).unwrap();

        controller
            .navigate(ScreenName::Results, ScreenPayload::Tracks(tracks(23)))
            .unwrap();
        controller
            .active_screen_mut()
            .handle_input(ScreenInput::Right)
            .unwrap();
        controller
            .navigate(ScreenName::Results, ScreenPayload::Tracks(tracks(2)))
            .unwrap();

        assert_eq!(controller.live_screens().len(), 2);
        match controller.active_screen().view() {
            ScreenView::Results(view) => {
                assert_eq!(view.page, 0);
                assert_eq!(view.total, 2);
            }
            ScreenView::Search { .. } => panic!("results screen should be active"),
        }
    }
}
