//! 类型定义模块

mod account;
mod notification;
mod view;

pub use account::{Account, AccountFields, AccountPayload, Password};
pub use notification::{Notification, Severity};
pub use view::{AccountListState, EditSession, FormMode, FormModeKind, ModalState};
