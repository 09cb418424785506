pub mod constants;
pub mod frame_task;
pub mod hearts;
pub mod messages;
pub mod timeline;
pub mod view;

pub use frame_task::*;
pub use hearts::*;
pub use messages::*;
pub use timeline::*;
pub use view::*;
