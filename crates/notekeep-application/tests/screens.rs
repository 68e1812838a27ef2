mod common;

use common::{Harness, MockBackend, note, task, user};
use notekeep_application::screen::{
    LoginScreen, NoteCreateScreen, NoteDetailScreen, NotesListScreen, Outcome, TaskCreateScreen,
    TaskDetailScreen, TasksListScreen, messages,
};
use notekeep_core::ResourceId;
use notekeep_core::category::CATEGORY_COLORS;
use notekeep_core::route::{Navigator, Route};

// -- login --------------------------------------------------------------------

#[tokio::test]
async fn test_login_rejects_blank_fields_without_network() {
    let h = Harness::signed_out().await;
    let screen = LoginScreen::new(h.ctx(), h.backend.clone());
    screen.set_email("a@a.com");
    screen.set_password("   ");

    assert_eq!(screen.submit().await, Outcome::Rejected);
    assert_eq!(
        h.alerts.last_message().as_deref(),
        Some(messages::LOGIN_FIELDS_REQUIRED)
    );
    assert!(h.backend.calls().is_empty());
}

#[tokio::test]
async fn test_login_signs_in_with_trimmed_password() {
    let h = Harness::signed_out().await;
    *h.backend.login_user.lock().unwrap() = Some(user());
    let screen = LoginScreen::new(h.ctx(), h.backend.clone());
    screen.set_email("alice@example.com");
    screen.set_password("  secret ");

    assert_eq!(screen.submit().await, Outcome::Done);
    assert_eq!(h.store.token().as_deref(), Some("token-123"));
    assert_eq!(h.store.user(), Some(user()));

    let sent = h.backend.credentials.lock().unwrap().clone();
    assert_eq!(sent[0].password, "secret");
    assert!(screen.debug_log().iter().any(|l| l == "Connexion réussie"));
    assert_eq!(h.alerts.count(), 0);
}

#[tokio::test]
async fn test_login_failure_alerts_and_stays_signed_out() {
    let h = Harness::signed_out().await;
    let screen = LoginScreen::new(h.ctx(), h.backend.clone());
    screen.set_email("alice@example.com");
    screen.set_password("wrong");

    assert_eq!(screen.submit().await, Outcome::Failed);
    assert!(h.store.token().is_none());
    assert_eq!(
        h.alerts.all(),
        vec![(
            messages::LOGIN_ERROR_TITLE.to_string(),
            messages::LOGIN_FAILED.to_string()
        )]
    );
}

// -- notes --------------------------------------------------------------------

#[tokio::test]
async fn test_notes_fetch_requires_token() {
    let h = Harness::signed_out().await;
    let screen = NotesListScreen::new(h.ctx(), h.backend.clone());

    assert_eq!(screen.fetch().await, Outcome::Rejected);
    assert_eq!(
        h.alerts.last_message().as_deref(),
        Some(messages::TOKEN_UNAVAILABLE)
    );
    assert!(h.backend.calls().is_empty());
}

#[tokio::test]
async fn test_notes_fetch_uses_session_token() {
    let h = Harness::signed_in().await;
    h.backend
        .notes
        .lock()
        .unwrap()
        .push(note(1, "Courses", "<p>lait</p>", &[]));
    let screen = NotesListScreen::new(h.ctx(), h.backend.clone());

    assert_eq!(screen.fetch().await, Outcome::Done);
    assert_eq!(screen.notes().len(), 1);
    assert_eq!(*h.backend.tokens.lock().unwrap(), vec!["token-123".to_string()]);
}

#[tokio::test]
async fn test_notes_fetch_failure_alerts_once() {
    let h = Harness::with_backend(MockBackend::failing()).await;
    h.store.sign_in("token-123", user()).await;
    let screen = NotesListScreen::new(h.ctx(), h.backend.clone());

    assert_eq!(screen.fetch().await, Outcome::Failed);
    assert_eq!(h.alerts.messages(), vec![messages::NOTES_FETCH_FAILED]);
    assert!(!screen.is_loading());
}

#[tokio::test]
async fn test_fetch_in_flight_is_skipped() {
    let h = Harness::signed_in().await;
    let gate = h.backend.hold();
    let screen = NotesListScreen::new(h.ctx(), h.backend.clone());

    let (first, second, _) = tokio::join!(screen.fetch(), screen.fetch(), async {
        tokio::task::yield_now().await;
        gate.notify_one();
    });

    assert_eq!(first, Outcome::Done);
    assert_eq!(second, Outcome::Skipped);
    assert_eq!(h.backend.calls(), vec!["GET /notes"]);
}

#[tokio::test]
async fn test_note_detail_loads_plain_text_and_categories() {
    let h = Harness::signed_in().await;
    h.backend
        .notes
        .lock()
        .unwrap()
        .push(note(9, "Idées", "<p>Hello <b>world</b></p>", &[2, 3]));
    let screen = NoteDetailScreen::new(h.ctx(), h.backend.clone(), h.backend.clone(), ResourceId::from(9));

    assert_eq!(screen.load().await, Outcome::Done);
    assert_eq!(screen.title(), "Idées");
    assert_eq!(screen.content(), "Hello world");
    assert_eq!(
        screen.categories().selected(),
        vec![ResourceId::from(2), ResourceId::from(3)]
    );
}

#[tokio::test]
async fn test_note_save_wraps_content_and_goes_back() {
    let h = Harness::signed_in().await;
    h.backend
        .notes
        .lock()
        .unwrap()
        .push(note(9, "Idées", "<p>old</p>", &[2]));
    h.navigator.push(Route::NoteDetail(ResourceId::from(9)));
    let screen = NoteDetailScreen::new(h.ctx(), h.backend.clone(), h.backend.clone(), ResourceId::from(9));
    screen.load().await;

    screen.set_content("new body");
    screen.toggle_category(&ResourceId::from(2));
    screen.toggle_category(&ResourceId::from(5));

    assert_eq!(screen.save().await, Outcome::Done);
    let drafts = h.backend.note_drafts.lock().unwrap().clone();
    assert_eq!(drafts[0].content, "<p>new body</p>");
    assert_eq!(drafts[0].categories, vec![ResourceId::from(5)]);
    assert_eq!(h.navigator.current(), Route::Home);
    assert_eq!(h.alerts.last_message().as_deref(), Some(messages::NOTE_UPDATED));
}

#[tokio::test]
async fn test_note_save_rejects_blank_title() {
    let h = Harness::signed_in().await;
    let screen = NoteDetailScreen::new(h.ctx(), h.backend.clone(), h.backend.clone(), ResourceId::from(9));
    screen.set_title("  ");
    screen.set_content("body");

    assert_eq!(screen.save().await, Outcome::Rejected);
    assert_eq!(h.alerts.last_message().as_deref(), Some(messages::TITLE_EMPTY));
    assert!(h.backend.calls().is_empty());
}

#[tokio::test]
async fn test_note_delete() {
    let h = Harness::signed_in().await;
    let screen = NoteDetailScreen::new(h.ctx(), h.backend.clone(), h.backend.clone(), ResourceId::from(9));

    assert_eq!(screen.delete().await, Outcome::Done);
    assert_eq!(h.backend.calls(), vec!["DELETE /notes/9"]);
}

#[tokio::test]
async fn test_category_dropdown_fetches_categories_when_opened() {
    let h = Harness::signed_in().await;
    let screen = NoteDetailScreen::new(h.ctx(), h.backend.clone(), h.backend.clone(), ResourceId::from(9));

    assert_eq!(screen.toggle_dropdown().await, Outcome::Done);
    assert!(screen.categories().is_open());
    assert_eq!(screen.toggle_dropdown().await, Outcome::Done);
    assert!(!screen.categories().is_open());
    assert_eq!(h.backend.calls(), vec!["GET /categories"]);
}

#[tokio::test]
async fn test_create_category_appends_and_selects() {
    let h = Harness::signed_in().await;
    let screen = NoteDetailScreen::new(h.ctx(), h.backend.clone(), h.backend.clone(), ResourceId::from(9));

    assert_eq!(screen.create_category("  ").await, Outcome::Rejected);
    assert_eq!(screen.create_category("Maison").await, Outcome::Done);

    let picker = screen.categories();
    assert_eq!(picker.categories().len(), 1);
    assert_eq!(picker.categories()[0].name, "Maison");
    assert_eq!(picker.selected(), vec![picker.categories()[0].id.clone()]);

    let draft = h.backend.category_drafts.lock().unwrap()[0].clone();
    assert!(CATEGORY_COLORS.contains(&draft.color.as_str()));
}

#[tokio::test]
async fn test_note_create_requires_both_fields() {
    let h = Harness::signed_in().await;
    let screen = NoteCreateScreen::new(h.ctx(), h.backend.clone(), h.backend.clone());
    screen.set_title("Titre");

    assert_eq!(screen.create().await, Outcome::Rejected);
    assert_eq!(
        h.alerts.last_message().as_deref(),
        Some(messages::NOTE_FIELDS_REQUIRED)
    );

    screen.set_content("Contenu");
    screen.toggle_category(&ResourceId::from(4));
    assert_eq!(screen.create().await, Outcome::Done);

    let drafts = h.backend.note_drafts.lock().unwrap().clone();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "Titre");
    assert_eq!(drafts[0].content, "<p>Contenu</p>");
    assert_eq!(drafts[0].categories, vec![ResourceId::from(4)]);
}

// -- tasks --------------------------------------------------------------------

#[tokio::test]
async fn test_task_search_is_case_insensitive() {
    let h = Harness::signed_in().await;
    h.backend.tasks.lock().unwrap().extend([
        task(1, "Acheter du LAIT"),
        task(2, "Appeler maman"),
    ]);
    let screen = TasksListScreen::new(h.ctx(), h.backend.clone());
    assert_eq!(screen.fetch().await, Outcome::Done);

    screen.search("lait");
    let visible = screen.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, ResourceId::from(1));

    screen.search("");
    assert_eq!(screen.visible_tasks().len(), 2);
}

#[tokio::test]
async fn test_tasks_sign_out_clears_session() {
    let h = Harness::signed_in().await;
    let screen = TasksListScreen::new(h.ctx(), h.backend.clone());

    screen.sign_out().await;
    assert!(h.store.token().is_none());
    assert!(h.store.user().is_none());
}

#[tokio::test]
async fn test_task_detail_falls_back_to_description() {
    let h = Harness::signed_in().await;
    let mut edited = task(2, "Original");
    edited.title = Some("Edited".to_string());
    edited.content = Some("<p>Details</p>".to_string());
    h.backend
        .tasks
        .lock()
        .unwrap()
        .extend([task(1, "Never edited"), edited]);

    let fresh = TaskDetailScreen::new(h.ctx(), h.backend.clone(), ResourceId::from(1));
    assert_eq!(fresh.load().await, Outcome::Done);
    assert_eq!(fresh.title(), "Never edited");
    assert_eq!(fresh.content(), "");

    let edited = TaskDetailScreen::new(h.ctx(), h.backend.clone(), ResourceId::from(2));
    assert_eq!(edited.load().await, Outcome::Done);
    assert_eq!(edited.title(), "Edited");
    assert_eq!(edited.content(), "Details");
}

#[tokio::test]
async fn test_task_save_puts_title_and_content() {
    let h = Harness::signed_in().await;
    h.backend.tasks.lock().unwrap().push(task(3, "Ranger"));
    let screen = TaskDetailScreen::new(h.ctx(), h.backend.clone(), ResourceId::from(3));
    screen.load().await;
    screen.set_content("le garage");

    assert_eq!(screen.save().await, Outcome::Done);
    let updates = h.backend.task_updates.lock().unwrap().clone();
    assert_eq!(updates[0].title, "Ranger");
    assert_eq!(updates[0].content, "le garage");
    assert_eq!(
        h.backend.calls(),
        vec!["GET /tasks/3", "PUT /tasks/3"]
    );
}

#[tokio::test]
async fn test_task_load_failure_alerts() {
    let h = Harness::signed_in().await;
    let screen = TaskDetailScreen::new(h.ctx(), h.backend.clone(), ResourceId::from(77));

    assert_eq!(screen.load().await, Outcome::Failed);
    assert_eq!(
        h.alerts.last_message().as_deref(),
        Some(messages::TASK_FETCH_FAILED)
    );
}

#[tokio::test]
async fn test_task_create_subtasks() {
    let h = Harness::signed_in().await;
    let screen = TaskCreateScreen::new(h.ctx(), h.backend.clone(), h.backend.clone());

    screen.add_subtask("  ");
    screen.add_subtask("un");
    screen.add_subtask("deux");
    screen.add_subtask("trois");
    screen.toggle_subtask(2);
    screen.remove_subtask(0);
    screen.remove_subtask(10);

    let subtasks = screen.subtasks();
    assert_eq!(subtasks.len(), 2);
    assert_eq!(subtasks[0].description, "deux");
    assert!(!subtasks[0].is_completed);
    assert_eq!(subtasks[1].description, "trois");
    assert!(subtasks[1].is_completed);
}

#[tokio::test]
async fn test_task_create_validates_before_network() {
    let h = Harness::signed_in().await;
    let screen = TaskCreateScreen::new(h.ctx(), h.backend.clone(), h.backend.clone());

    assert_eq!(screen.create().await, Outcome::Rejected);
    assert_eq!(
        h.alerts.last_message().as_deref(),
        Some(messages::TASK_TITLE_REQUIRED)
    );

    screen.set_title("Arroser les plantes");
    assert_eq!(screen.create().await, Outcome::Rejected);
    assert_eq!(
        h.alerts.last_message().as_deref(),
        Some(messages::TASK_NOTE_REQUIRED)
    );
    assert!(h.backend.calls().is_empty());
}

#[tokio::test]
async fn test_task_create_posts_title_as_description() {
    let h = Harness::signed_in().await;
    h.backend
        .notes
        .lock()
        .unwrap()
        .push(note(5, "Jardin", "", &[]));
    h.navigator.push(Route::TaskCreate);
    let screen = TaskCreateScreen::new(h.ctx(), h.backend.clone(), h.backend.clone());

    assert_eq!(screen.toggle_dropdown().await, Outcome::Done);
    assert!(screen.notes().is_open());
    screen.select_note(ResourceId::from(5));
    assert!(!screen.notes().is_open());
    assert_eq!(screen.notes().selected_title().as_deref(), Some("Jardin"));

    screen.set_title("Arroser les plantes");
    screen.set_completed(true);
    screen.add_subtask("tomates");

    assert_eq!(screen.create().await, Outcome::Done);
    let drafts = h.backend.task_drafts.lock().unwrap().clone();
    assert_eq!(drafts[0].description, "Arroser les plantes");
    assert_eq!(drafts[0].note_id, ResourceId::from(5));
    assert!(drafts[0].is_completed);
    assert_eq!(drafts[0].subtasks.len(), 1);
    assert_eq!(h.navigator.current(), Route::Home);
    assert_eq!(h.alerts.last_message().as_deref(), Some(messages::TASK_CREATED));
}
