//! Constants for the login screen

pub const CSS_NEEDS_VALIDATION: &str = ".needs-validation";
pub const CSS_TOGGLE_PASSWORD: &str = ".toggle-password";
pub const CSS_REQUIRED: &str = "[required]";
pub const CSS_SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const CSS_SPINNER: &str = ".spinner-border";
pub const CSS_SUBMIT_TEXT: &str = ".submit-text";
pub const CSS_ALERT: &str = ".alert";
pub const CSS_ALERT_DANGER: &str = ".alert-danger";
pub const CSS_FORM_CONTROL: &str = ".form-control";

pub const ID_USERNAME: &str = "username";
pub const ID_PASSWORD: &str = "password";
// fields the server flags when it rejects the credentials
pub const IDS_CREDENTIAL_FIELDS: &[&str] = &[ID_USERNAME, ID_PASSWORD];
pub const ICON_ID_SUFFIX: &str = "-icon";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_FOCUSED: &str = "focused";
pub const CLASS_HIDDEN: &str = "d-none";
pub const CLASS_WAS_VALIDATED: &str = "was-validated";

pub const SHAKE_ANIMATION: &str = "shake 0.5s";

// timings, in milliseconds
pub const TOGGLE_FLASH_MS: u32 = 200;
pub const ICON_FLASH_MS: u32 = 3000;
pub const SHAKE_MS: u32 = 500;
pub const SUBMIT_DELAY_MS: u32 = 500;
pub const ALERT_CLOSE_MS: u32 = 5000;

pub const MSG_REQUIRED_FIELDS: &str = "Por favor complete todos los campos requeridos";
pub const MSG_VERIFYING: &str = "Verificando...";
