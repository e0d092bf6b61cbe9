//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{watch, RwLock};

use crate::config::ControllerConfig;
use crate::error::RemoteError;
use crate::services::{AccountListController, ControllerContext};
use crate::traits::{AccountsService, NotificationSink, StaticCurrentUser};
use crate::types::{Account, AccountListState, AccountPayload, Notification, Password};

pub const TEST_USER_ID: &str = "user-1";

/// Remote operation, used to inject failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// Recorded remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(AccountPayload),
    Update(String, AccountPayload),
    Delete(String),
}

// ===== MockAccountsService =====

pub struct MockAccountsService {
    accounts: RwLock<Vec<Account>>,
    calls: RwLock<Vec<Call>>,
    failing: RwLock<HashSet<Op>>,
    /// 如果 Some，每次变更调用时记录控制器状态（用于验证乐观关闭）
    observer: RwLock<Option<watch::Receiver<AccountListState>>>,
    observed: RwLock<Vec<AccountListState>>,
    next_id: AtomicU64,
}

impl MockAccountsService {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
            calls: RwLock::new(Vec::new()),
            failing: RwLock::new(HashSet::new()),
            observer: RwLock::new(None),
            observed: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub async fn seed(&self, accounts: Vec<Account>) {
        *self.accounts.write().await = accounts;
    }

    pub async fn set_failing(&self, op: Op, failing: bool) {
        let mut set = self.failing.write().await;
        if failing {
            set.insert(op);
        } else {
            set.remove(&op);
        }
    }

    pub async fn observe(&self, rx: watch::Receiver<AccountListState>) {
        *self.observer.write().await = Some(rx);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    pub async fn clear_calls(&self) {
        self.calls.write().await.clear();
    }

    pub async fn count(&self, op: Op) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| {
                matches!(
                    (op, c),
                    (Op::List, Call::List)
                        | (Op::Create, Call::Create(_))
                        | (Op::Update, Call::Update(..))
                        | (Op::Delete, Call::Delete(_))
                )
            })
            .count()
    }

    /// Controller states seen at each create/update/delete call
    pub async fn observed(&self) -> Vec<AccountListState> {
        self.observed.read().await.clone()
    }

    async fn record(&self, call: Call, op: Op) -> Result<(), RemoteError> {
        self.calls.write().await.push(call);
        if op != Op::List {
            if let Some(rx) = self.observer.read().await.as_ref() {
                let snapshot = rx.borrow().clone();
                self.observed.write().await.push(snapshot);
            }
        }
        if self.failing.read().await.contains(&op) {
            return Err(RemoteError::new(format!("{op:?} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountsService for MockAccountsService {
    async fn list(&self) -> Result<Vec<Account>, RemoteError> {
        self.record(Call::List, Op::List).await?;
        Ok(self.accounts.read().await.clone())
    }

    async fn create(&self, payload: &AccountPayload) -> Result<Account, RemoteError> {
        self.record(Call::Create(payload.clone()), Op::Create).await?;
        let id = format!("acc-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let account = Account {
            id,
            name: payload.name.clone(),
            student_id: payload.student_id.clone(),
            password: payload.password.clone(),
            user_id: payload.user_id.clone(),
        };
        self.accounts.write().await.push(account.clone());
        Ok(account)
    }

    async fn update(&self, id: &str, payload: &AccountPayload) -> Result<Account, RemoteError> {
        self.record(Call::Update(id.to_string(), payload.clone()), Op::Update)
            .await?;
        let mut store = self.accounts.write().await;
        let account = store
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RemoteError::new(format!("account {id} not found")))?;
        account.name = payload.name.clone();
        account.student_id = payload.student_id.clone();
        account.password = payload.password.clone();
        Ok(account.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        self.record(Call::Delete(id.to_string()), Op::Delete).await?;
        self.accounts.write().await.retain(|a| a.id != id);
        Ok(())
    }
}

// ===== RecordingNotificationSink =====

#[derive(Default)]
pub struct RecordingNotificationSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

// ===== 工厂方法 =====

pub fn test_account(id: &str, name: &str, student_id: &str, password: &str) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        student_id: student_id.to_string(),
        password: Password::new(password),
        user_id: TEST_USER_ID.to_string(),
    }
}

/// 创建测试用 `AccountListController`，mock 服务会观察控制器状态
pub async fn create_test_controller(
    config: ControllerConfig,
) -> (
    AccountListController,
    Arc<MockAccountsService>,
    Arc<RecordingNotificationSink>,
) {
    let service = Arc::new(MockAccountsService::new());
    let sink = Arc::new(RecordingNotificationSink::new());
    let ctx = Arc::new(ControllerContext::new(
        service.clone(),
        sink.clone(),
        Arc::new(StaticCurrentUser::new(TEST_USER_ID)),
    ));
    let controller = AccountListController::new(ctx, config);
    service.observe(controller.subscribe()).await;
    (controller, service, sink)
}
