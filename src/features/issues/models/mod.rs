mod issue;
mod issue_update;

pub use issue::*;
pub use issue_update::*;
