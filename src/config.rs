use std::path::PathBuf;

/// Default width a tab advances indentation to the next multiple of.
pub const DEFAULT_TAB_SIZE: usize = 8;
/// Default name of the global variable scripts use to report success.
pub const DEFAULT_RESULT_NAME: &str = "result";
/// Default directory searched for script tests.
pub const DEFAULT_TEST_DIR: &str = "tests/scripts";

/// Settings shared by the library entry points and the command line tool.
///
/// # Example
/// ```
/// use adder::config::Config;
///
/// let config = Config::default().with_tab_size(4)
///                               .with_result_name("ok");
/// assert_eq!(config.tab_size, 4);
/// assert_eq!(config.result_name, "ok");
/// assert!(!config.debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tab stop width used when measuring indentation.
    pub tab_size:    usize,
    /// Global variable inspected by [`crate::get_result`].
    pub result_name: String,
    /// Directory walked by the `test` command.
    pub test_dir:    PathBuf,
    /// Enables verbose diagnostics.
    pub debug:       bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { tab_size:    DEFAULT_TAB_SIZE,
               result_name: DEFAULT_RESULT_NAME.to_string(),
               test_dir:    PathBuf::from(DEFAULT_TEST_DIR),
               debug:       false, }
    }
}

impl Config {
    /// Sets the tab stop width. A width of zero is treated as one.
    #[must_use]
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size.max(1);
        self
    }

    /// Sets the name of the result variable.
    #[must_use]
    pub fn with_result_name(mut self, name: impl Into<String>) -> Self {
        self.result_name = name.into();
        self
    }

    /// Sets the script test directory.
    #[must_use]
    pub fn with_test_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_dir = dir.into();
        self
    }

    /// Enables or disables debug diagnostics.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
