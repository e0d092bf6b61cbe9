//! 业务逻辑服务层

mod account_list_controller;

pub use account_list_controller::{AccountListController, SubmitOutcome};

use std::sync::Arc;

use crate::traits::{AccountsService, CurrentUserProvider, NotificationSink};

/// 控制器上下文 - 持有所有协作者
///
/// 平台层需要创建此上下文，并注入远程服务、通知与当前用户的实现。
pub struct ControllerContext {
    accounts_service: Arc<dyn AccountsService>,
    notification_sink: Arc<dyn NotificationSink>,
    current_user: Arc<dyn CurrentUserProvider>,
}

impl ControllerContext {
    /// 创建控制器上下文
    #[must_use]
    pub fn new(
        accounts_service: Arc<dyn AccountsService>,
        notification_sink: Arc<dyn NotificationSink>,
        current_user: Arc<dyn CurrentUserProvider>,
    ) -> Self {
        Self {
            accounts_service,
            notification_sink,
            current_user,
        }
    }

    #[must_use]
    pub fn accounts_service(&self) -> &Arc<dyn AccountsService> {
        &self.accounts_service
    }

    #[must_use]
    pub fn notification_sink(&self) -> &Arc<dyn NotificationSink> {
        &self.notification_sink
    }

    #[must_use]
    pub fn current_user(&self) -> &Arc<dyn CurrentUserProvider> {
        &self.current_user
    }
}
