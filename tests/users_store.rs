use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use serde_json::json;
use usuarios_web::{
    app_lib::{AppError, Prompts},
    features::users::{
        DispatchOutcome, EditorMode, EditorMsg, EditorPhase, FieldUpdate, RemoveOutcome, UserId,
        UserRecord, UsersApi, UsersModel, store,
        store::DELETE_CONFIRM_MESSAGE,
        validation::AGE_ERROR_MESSAGE,
    },
};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    List,
    Create(serde_json::Value),
    Update(String, serde_json::Value),
    Remove(String),
}

/// Records every call; answers from scripted queues, defaulting to success.
#[derive(Default)]
struct FakeApi {
    calls: RefCell<Vec<Call>>,
    lists: RefCell<VecDeque<Result<Vec<UserRecord>, AppError>>>,
    mutations: RefCell<VecDeque<Result<(), AppError>>>,
}

impl FakeApi {
    fn with_list(self, result: Result<Vec<UserRecord>, AppError>) -> Self {
        self.lists.borrow_mut().push_back(result);
        self
    }

    fn with_mutation(self, result: Result<(), AppError>) -> Self {
        self.mutations.borrow_mut().push_back(result);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next_mutation(&self) -> Result<(), AppError> {
        self.mutations.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

impl UsersApi for FakeApi {
    async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        self.calls.borrow_mut().push(Call::List);
        self.lists.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn create(&self, record: &UserRecord) -> Result<(), AppError> {
        let body = serde_json::to_value(record).expect("encode");
        self.calls.borrow_mut().push(Call::Create(body));
        tokio::task::yield_now().await;
        self.next_mutation()
    }

    async fn update(&self, id: &UserId, record: &UserRecord) -> Result<(), AppError> {
        let body = serde_json::to_value(record).expect("encode");
        self.calls
            .borrow_mut()
            .push(Call::Update(format!("/users/{id}"), body));
        tokio::task::yield_now().await;
        self.next_mutation()
    }

    async fn remove(&self, id: &UserId) -> Result<(), AppError> {
        self.calls.borrow_mut().push(Call::Remove(format!("/users/{id}")));
        self.next_mutation()
    }
}

#[derive(Default)]
struct RecordingPrompts {
    accept: bool,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl RecordingPrompts {
    fn accepting() -> Self {
        Self {
            accept: true,
            ..Self::default()
        }
    }
}

impl Prompts for RecordingPrompts {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.accept
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn ana(id: i64) -> UserRecord {
    UserRecord {
        id: Some(UserId::from(id)),
        nombre: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        edad: "30".to_string(),
    }
}

fn model_with(users: Vec<UserRecord>) -> Rc<RefCell<UsersModel>> {
    Rc::new(RefCell::new(UsersModel {
        users,
        ..UsersModel::default()
    }))
}

async fn send(
    api: &FakeApi,
    model: &Rc<RefCell<UsersModel>>,
    prompts: &RecordingPrompts,
    msg: EditorMsg,
) -> DispatchOutcome {
    store::dispatch(api, model, prompts, msg).await
}

fn field(update: FieldUpdate) -> EditorMsg {
    EditorMsg::Field(update)
}

#[tokio::test]
async fn create_posts_draft_then_refreshes_and_closes() {
    let api = FakeApi::default().with_list(Ok(vec![ana(1)]));
    let model = model_with(Vec::new());
    let prompts = RecordingPrompts::default();

    send(&api, &model, &prompts, EditorMsg::OpenCreate).await;
    send(&api, &model, &prompts, field(FieldUpdate::SetName("Ana".into()))).await;
    send(&api, &model, &prompts, field(FieldUpdate::SetEmail("ana@x.com".into()))).await;
    send(&api, &model, &prompts, field(FieldUpdate::SetAge("30".into()))).await;
    let outcome = send(&api, &model, &prompts, EditorMsg::Submit).await;

    assert_eq!(outcome, DispatchOutcome::Saved);
    assert_eq!(
        api.calls(),
        vec![
            Call::Create(json!({ "nombre": "Ana", "email": "ana@x.com", "edad": "30" })),
            Call::List,
        ]
    );
    let model = model.borrow();
    assert!(!model.editor.is_open());
    assert_eq!(model.users, vec![ana(1)]);
}

#[tokio::test]
async fn out_of_range_age_blocks_submission() {
    let api = FakeApi::default();
    let model = model_with(Vec::new());
    let prompts = RecordingPrompts::default();

    send(&api, &model, &prompts, EditorMsg::OpenCreate).await;
    send(&api, &model, &prompts, field(FieldUpdate::SetAge("150".into()))).await;

    {
        let model = model.borrow();
        assert_eq!(model.editor.error(), Some(AGE_ERROR_MESSAGE));
        assert_eq!(model.editor.draft().edad, "");
    }

    let outcome = send(&api, &model, &prompts, EditorMsg::Submit).await;

    assert_eq!(outcome, DispatchOutcome::Alerted);
    assert!(api.calls().is_empty());
    assert_eq!(prompts.alerts.borrow().len(), 1);
    assert_eq!(
        model.borrow().editor.phase(),
        EditorPhase::Open(EditorMode::Create)
    );
}

#[tokio::test]
async fn edit_puts_full_record_with_id_then_refreshes() {
    let mut changed = ana(7);
    changed.email = "ana@y.com".to_string();
    let api = FakeApi::default().with_list(Ok(vec![changed.clone()]));
    let model = model_with(vec![ana(7)]);
    let prompts = RecordingPrompts::default();

    send(&api, &model, &prompts, EditorMsg::OpenEdit(ana(7))).await;
    send(&api, &model, &prompts, field(FieldUpdate::SetEmail("ana@y.com".into()))).await;
    let outcome = send(&api, &model, &prompts, EditorMsg::Submit).await;

    assert_eq!(outcome, DispatchOutcome::Saved);
    assert_eq!(
        api.calls(),
        vec![
            Call::Update(
                "/users/7".to_string(),
                json!({ "id": 7, "nombre": "Ana", "email": "ana@y.com", "edad": "30" })
            ),
            Call::List,
        ]
    );
    assert_eq!(model.borrow().users, vec![changed]);
}

#[tokio::test]
async fn failed_save_keeps_editor_open_with_draft() {
    let api = FakeApi::default().with_mutation(Err(AppError::Http {
        status: 500,
        message: "boom".to_string(),
    }));
    let model = model_with(vec![ana(1)]);
    let prompts = RecordingPrompts::default();

    send(&api, &model, &prompts, EditorMsg::OpenCreate).await;
    send(&api, &model, &prompts, field(FieldUpdate::SetName("Luis".into()))).await;
    let outcome = send(&api, &model, &prompts, EditorMsg::Submit).await;

    assert!(matches!(outcome, DispatchOutcome::Failed(AppError::Http { status: 500, .. })));
    assert_eq!(api.calls().len(), 1, "no refresh after a failed save");

    let model = model.borrow();
    assert_eq!(model.editor.phase(), EditorPhase::Open(EditorMode::Create));
    assert_eq!(model.editor.draft().nombre, "Luis");
    assert_eq!(model.users, vec![ana(1)]);
}

#[tokio::test]
async fn failed_save_can_be_retried_manually() {
    let api = FakeApi::default()
        .with_mutation(Err(AppError::Network("offline".to_string())))
        .with_mutation(Ok(()));
    let model = model_with(Vec::new());
    let prompts = RecordingPrompts::default();

    send(&api, &model, &prompts, EditorMsg::OpenCreate).await;
    let first = send(&api, &model, &prompts, EditorMsg::Submit).await;
    let second = send(&api, &model, &prompts, EditorMsg::Submit).await;

    assert!(matches!(first, DispatchOutcome::Failed(_)));
    assert_eq!(second, DispatchOutcome::Saved);
    assert!(!model.borrow().editor.is_open());
}

#[tokio::test]
async fn double_submit_issues_a_single_request() {
    let api = FakeApi::default();
    let model = model_with(Vec::new());
    let prompts = RecordingPrompts::default();

    send(&api, &model, &prompts, EditorMsg::OpenCreate).await;
    let (first, second) = tokio::join!(
        send(&api, &model, &prompts, EditorMsg::Submit),
        send(&api, &model, &prompts, EditorMsg::Submit),
    );

    assert_eq!(first, DispatchOutcome::Saved);
    assert_eq!(second, DispatchOutcome::Applied);
    let creates = api
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Create(_)))
        .count();
    assert_eq!(creates, 1);
}

#[tokio::test]
async fn stale_save_still_refreshes_without_touching_reopened_editor() {
    let api = FakeApi::default().with_list(Ok(vec![ana(1)]));
    let model = model_with(Vec::new());
    let prompts = RecordingPrompts::default();

    send(&api, &model, &prompts, EditorMsg::OpenCreate).await;
    send(&api, &model, &prompts, field(FieldUpdate::SetName("Ana".into()))).await;

    // The save is parked in the API when the second branch reopens the editor.
    let (saved, _) = tokio::join!(send(&api, &model, &prompts, EditorMsg::Submit), async {
        send(&api, &model, &prompts, EditorMsg::OpenCreate).await;
        send(&api, &model, &prompts, field(FieldUpdate::SetName("Luis".into()))).await
    });

    assert_eq!(saved, DispatchOutcome::Saved);
    assert_eq!(
        api.calls(),
        vec![
            Call::Create(json!({ "nombre": "Ana", "email": "", "edad": "" })),
            Call::List,
        ]
    );
    let model = model.borrow();
    assert_eq!(model.users, vec![ana(1)]);
    assert_eq!(model.editor.phase(), EditorPhase::Open(EditorMode::Create));
    assert_eq!(model.editor.draft().nombre, "Luis");
}

#[tokio::test]
async fn declined_delete_issues_no_request() {
    let api = FakeApi::default();
    let model = model_with(vec![ana(7)]);
    let prompts = RecordingPrompts::default();

    let outcome = store::remove(&api, &model, &prompts, &UserId::from(7)).await;

    assert_eq!(outcome, RemoveOutcome::Declined);
    assert!(api.calls().is_empty());
    assert_eq!(prompts.confirms.borrow().as_slice(), [DELETE_CONFIRM_MESSAGE]);
    assert_eq!(model.borrow().users, vec![ana(7)]);
}

#[tokio::test]
async fn confirmed_delete_removes_then_refreshes() {
    let api = FakeApi::default().with_list(Ok(Vec::new()));
    let model = model_with(vec![ana(7)]);
    let prompts = RecordingPrompts::accepting();

    let outcome = store::remove(&api, &model, &prompts, &UserId::from(7)).await;

    assert_eq!(outcome, RemoveOutcome::Removed);
    assert_eq!(api.calls(), vec![Call::Remove("/users/7".to_string()), Call::List]);
    assert!(model.borrow().users.is_empty());
}

#[tokio::test]
async fn failed_delete_keeps_the_list() {
    let api = FakeApi::default().with_mutation(Err(AppError::Http {
        status: 404,
        message: "not found".to_string(),
    }));
    let model = model_with(vec![ana(7)]);
    let prompts = RecordingPrompts::accepting();

    let outcome = store::remove(&api, &model, &prompts, &UserId::from(7)).await;

    assert!(matches!(outcome, RemoveOutcome::Failed(_)));
    assert_eq!(api.calls(), vec![Call::Remove("/users/7".to_string())]);
    assert_eq!(model.borrow().users, vec![ana(7)]);
}

#[tokio::test]
async fn failed_refresh_keeps_stale_list() {
    let api = FakeApi::default().with_list(Err(AppError::Timeout("slow".to_string())));
    let model = model_with(vec![ana(1), ana(2)]);

    let result = store::refresh(&api, &model).await;

    assert!(result.is_err());
    assert_eq!(model.borrow().users, vec![ana(1), ana(2)]);
}

#[tokio::test]
async fn refresh_keeps_server_order() {
    let api = FakeApi::default().with_list(Ok(vec![ana(3), ana(1), ana(2)]));
    let model = model_with(Vec::new());

    store::refresh(&api, &model).await.expect("refresh");

    let ids: Vec<_> = model
        .borrow()
        .users
        .iter()
        .filter_map(|user| user.id.clone())
        .collect();
    assert_eq!(ids, vec![UserId::from(3), UserId::from(1), UserId::from(2)]);
}
