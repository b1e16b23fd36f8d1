//! Development/production script switching for the explorer's `index.html`.
//!
//! In development the page loads its modules from `/js/`; the deployed site
//! serves them from `/mesa-explorer/js/`. Both sets of `<script>` tags live in
//! the page and the inactive set is kept inside HTML comments. Switching
//! rewrites those comments in place and leaves the rest of the page alone.

pub mod error;
pub mod layout;
pub mod switch;

pub use error::{HtmlModeError, Result};
pub use layout::ScriptLayout;
pub use switch::{SiteMode, SwitchOutcome, detect_mode, read_mode, switch_file, switch_mode};
