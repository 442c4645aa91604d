use layoffs_model::{CleaningOptions, IndustryCatalog};

/// Everything a cleaning run needs besides the rows themselves.
#[derive(Debug, Clone, Default)]
pub struct CleaningContext {
    pub catalog: IndustryCatalog,
    pub options: CleaningOptions,
}

impl CleaningContext {
    pub fn new(catalog: IndustryCatalog) -> Self {
        Self {
            catalog,
            options: CleaningOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CleaningOptions) -> Self {
        self.options = options;
        self
    }
}
