use std::path::Path;

use crate::data::loader;
use crate::data::parser::ParsedTraces;
use crate::error::LoadResult;
use crate::plot2d::graph_controller::GraphViewController;
use crate::state::config::ViewerConfig;
use crate::state::document::Document;
use crate::state::series::SeriesBuilder;

/// State owned by the viewer window: the current document and the camera.
#[derive(Debug)]
pub struct ViewerState {
    pub config: ViewerConfig,
    pub document: Document,
    pub camera: GraphViewController,
    next_generation: u64,
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        let camera = GraphViewController::new(&config);
        Self {
            config,
            document: Document::default(),
            camera,
            next_generation: 1,
        }
    }

    /// Replace the current document with one built from `parsed`.
    pub fn install(&mut self, parsed: &ParsedTraces, source: Option<&Path>) -> &Document {
        let builder = SeriesBuilder::from_config(&self.config);
        let document = Document::build(parsed, &builder, self.next_generation, source);
        self.next_generation += 1;

        // The old document and its primitives go away in one step.
        self.document = document;
        &self.document
    }

    /// Load a trace file. On error the current document stays in place.
    pub fn load_path(&mut self, path: &Path) -> LoadResult<&Document> {
        let parsed = loader::load_trace_file(path)?;
        Ok(self.install(&parsed, Some(path)))
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
