//! Static constants shared by the storefront.

/// Storage slot holding the persisted cart snapshot.
pub const CART_STORAGE_KEY: &str = "okit-boost-cart";

/// Where a successful sign-in lands when no `next`/`redirect` was given.
pub const DEFAULT_REDIRECT_PATH: &str = "/";

/// Page shown when the auth code exchange fails.
pub const AUTH_ERROR_PATH: &str = "/auth/auth-code-error";

/// Cookie carrying the access token after sign-in.
pub const SESSION_COOKIE_NAME: &str = "okit-boost-session";

/// User-facing messages. The storefront is French-language.
pub mod messages {
    pub const UNAUTHORIZED: &str = "Non autorisé";
    pub const FORBIDDEN: &str = "Accès réservé aux administrateurs";
    pub const INVALID_REQUEST: &str = "Requête invalide";
    pub const SERVER_ERROR: &str = "Erreur serveur";

    pub const PLATFORM_NOT_FOUND: &str = "Plateforme non trouvée";
    pub const SERVICE_NOT_FOUND: &str = "Service non trouvé";
    pub const TRIAL_REQUEST_NOT_FOUND: &str = "Demande d'essai non trouvée";
    pub const PROFILE_NOT_FOUND: &str = "Profil non trouvé";

    pub const FETCH_PLATFORMS_FAILED: &str = "Erreur lors de la récupération des plateformes";
    pub const FETCH_SERVICES_FAILED: &str = "Erreur lors de la récupération des services";
    pub const CREATE_SERVICE_FAILED: &str = "Erreur lors de la création du service";
    pub const UPDATE_SERVICE_FAILED: &str = "Erreur lors de la mise à jour du service";
    pub const DELETE_SERVICE_FAILED: &str = "Erreur lors de la suppression du service";

    pub const FETCH_TRIAL_REQUESTS_FAILED: &str =
        "Erreur lors de la récupération des demandes d'essai";
    pub const CREATE_TRIAL_REQUEST_FAILED: &str =
        "Erreur lors de la création de la demande d'essai";
    pub const UPDATE_TRIAL_REQUEST_FAILED: &str =
        "Erreur lors de la mise à jour de la demande d'essai";
    pub const DELETE_TRIAL_REQUEST_FAILED: &str =
        "Erreur lors de la suppression de la demande d'essai";

    pub const FETCH_PROFILE_FAILED: &str = "Erreur lors de la récupération du profil";
}
