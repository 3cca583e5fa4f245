pub mod board;
pub mod drag;
pub mod error;
pub mod filter;
pub mod list;
pub mod priority;
pub mod task;

pub use board::TaskBoard;
pub use drag::{DragSession, DropTarget, RowGeometry, insertion_point};
pub use error::{TaskError, ValidationError};
pub use filter::{FilterMode, Visibility, visibility};
pub use list::TaskList;
pub use priority::Priority;
pub use task::Task;
