//! Alert texts shown by the screens.

pub const ERROR_TITLE: &str = "Erreur";
pub const SUCCESS_TITLE: &str = "Succès";
pub const LOGIN_ERROR_TITLE: &str = "Erreur de connexion";

pub const TOKEN_UNAVAILABLE: &str = "Token non disponible.";

pub const LOGIN_FIELDS_REQUIRED: &str = "Veuillez remplir tous les champs";
pub const LOGIN_FAILED: &str = "Impossible de se connecter. Veuillez vérifier vos identifiants.";

pub const NOTES_FETCH_FAILED: &str = "Impossible de récupérer les rappels.";
pub const NOTE_CHOICES_FETCH_FAILED: &str = "Impossible de récupérer les notes.";
pub const NOTE_FETCH_FAILED: &str = "Impossible de récupérer la note.";
pub const NOTE_FIELDS_REQUIRED: &str = "Veuillez remplir tous les champs.";
pub const NOTE_CREATED: &str = "Note créée avec succès !";
pub const NOTE_CREATE_FAILED: &str = "Impossible de créer la note.";
pub const NOTE_UPDATED: &str = "Note mise à jour";
pub const NOTE_UPDATE_FAILED: &str = "Impossible de sauvegarder la note";
pub const NOTE_DELETED: &str = "Note supprimée";
pub const NOTE_DELETE_FAILED: &str = "Échec de la suppression";

pub const TITLE_EMPTY: &str = "Le titre ne peut pas être vide";

pub const CATEGORIES_FETCH_FAILED: &str = "Impossible de récupérer les catégories.";
pub const CATEGORY_NAME_EMPTY: &str = "Le nom de la catégorie ne peut pas être vide";
pub const CATEGORY_CREATED: &str = "Catégorie créée avec succès";
pub const CATEGORY_CREATE_FAILED: &str = "Impossible de créer la catégorie";

pub const TASKS_FETCH_FAILED: &str = "Impossible de récupérer les tâches.";
pub const TASK_FETCH_FAILED: &str = "Impossible de récupérer la tâche.";
pub const TASK_TITLE_REQUIRED: &str = "Veuillez ajouter un titre à la tâche.";
pub const TASK_NOTE_REQUIRED: &str = "Veuillez sélectionner une note associée.";
pub const TASK_CREATED: &str = "Tâche créée avec succès !";
pub const TASK_CREATE_FAILED: &str = "Impossible de créer la tâche.";
pub const TASK_UPDATED: &str = "Tâche mise à jour";
pub const TASK_UPDATE_FAILED: &str = "Impossible de sauvegarder la tâche";
pub const TASK_DELETED: &str = "Tâche supprimée";
pub const TASK_DELETE_FAILED: &str = "Échec de la suppression";
