//! Year-selection state machine driving the map's live data source.

use vtm_data::YearIndex;
use vtm_geo::{join, FeatureCollection};

/// Output seam to the rendering collaborator's mutable GeoJSON source.
///
/// The controller takes its sink as a constructor parameter instead of
/// reaching for a process-wide map handle, so tests can substitute a
/// recording implementation.
pub trait MapDataSink {
    fn set_states_data(&mut self, data: &FeatureCollection);
}

/// Last observable render state of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing pushed to the map yet.
    Idle,
    /// The given year was last joined and pushed.
    Rendered(String),
}

/// Owns the immutable inputs (base boundaries, year index) and reacts to
/// year selections by joining and pushing a fresh merged collection.
pub struct ViewController<S: MapDataSink> {
    base: FeatureCollection,
    index: YearIndex,
    sink: S,
    state: ViewState,
}

impl<S: MapDataSink> ViewController<S> {
    pub fn new(base: FeatureCollection, index: YearIndex, sink: S) -> Self {
        Self {
            base,
            index,
            sink,
            state: ViewState::Idle,
        }
    }

    /// Join the requested year and push the merged collection to the sink.
    ///
    /// Synchronous and idempotent: re-selecting the current year recomputes
    /// and re-pushes a value-equal collection; nothing accumulates across
    /// calls.
    pub fn select_year(&mut self, year: &str) {
        let merged = join(&self.base, &self.index, year);
        log::debug!(
            "pushing {} merged features for year {}",
            merged.features.len(),
            year
        );
        self.sink.set_states_data(&merged);
        self.state = ViewState::Rendered(year.to_string());
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The last rendered year, if any selection has happened.
    pub fn rendered_year(&self) -> Option<&str> {
        match &self.state {
            ViewState::Idle => None,
            ViewState::Rendered(year) => Some(year),
        }
    }

    /// Min/max numeric year in the loaded statistics, for the slider range.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.index.year_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use vtm_data::parse_table;

    /// Records every pushed collection for inspection.
    #[derive(Default, Clone)]
    struct RecordingSink {
        pushes: Rc<RefCell<Vec<FeatureCollection>>>,
    }

    impl MapDataSink for RecordingSink {
        fn set_states_data(&mut self, data: &FeatureCollection) {
            self.pushes.borrow_mut().push(data.clone());
        }
    }

    fn controller() -> (ViewController<RecordingSink>, RecordingSink) {
        let base = FeatureCollection::parse(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"NAME": "Ohio"}, "geometry": null}
                ]
            }"#,
        )
        .unwrap();
        let index = YearIndex::build(&parse_table(
            "YEAR,STATE,VEP,VEP_TURNOUT_RATE\n\
             2008,Ohio,8648600,66.8\n\
             2012,Ohio,8700118,64.5\n",
        ));
        let sink = RecordingSink::default();
        (ViewController::new(base, index, sink.clone()), sink)
    }

    #[test]
    fn starts_idle_and_renders_on_selection() {
        let (mut ctrl, sink) = controller();
        assert_eq!(*ctrl.state(), ViewState::Idle);
        assert_eq!(ctrl.rendered_year(), None);

        ctrl.select_year("2008");
        assert_eq!(*ctrl.state(), ViewState::Rendered("2008".to_string()));
        assert_eq!(ctrl.rendered_year(), Some("2008"));
        assert_eq!(sink.pushes.borrow().len(), 1);
        assert_eq!(
            sink.pushes.borrow()[0].features[0].properties["VEP_NUM"],
            serde_json::json!(8648600.0)
        );
    }

    #[test]
    fn reselecting_the_same_year_pushes_an_equal_collection() {
        let (mut ctrl, sink) = controller();
        ctrl.select_year("2012");
        ctrl.select_year("2012");
        let pushes = sink.pushes.borrow();
        assert_eq!(pushes.len(), 2);
        assert_eq!(pushes[0], pushes[1]);
    }

    #[test]
    fn switching_back_reproduces_the_original_render() {
        let (mut ctrl, sink) = controller();
        ctrl.select_year("2008");
        ctrl.select_year("2012");
        ctrl.select_year("2008");
        let pushes = sink.pushes.borrow();
        assert_eq!(pushes.len(), 3);
        assert_eq!(pushes[0], pushes[2]);
        assert_ne!(pushes[0], pushes[1]);
    }

    #[test]
    fn unknown_year_still_renders() {
        let (mut ctrl, sink) = controller();
        ctrl.select_year("1990");
        assert_eq!(ctrl.rendered_year(), Some("1990"));
        let pushes = sink.pushes.borrow();
        assert_eq!(pushes[0].features[0].properties["VEP_NUM"], serde_json::json!(0.0));
    }

    #[test]
    fn exposes_year_bounds_from_the_index() {
        let (ctrl, _) = controller();
        assert_eq!(ctrl.year_bounds(), Some((2008, 2012)));
    }
}
