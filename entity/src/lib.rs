pub mod user;
pub mod auth_token;

/*
 One row per account in `user`, identified by the lowercased email.
 A user owns at most one `auth_token`. The key is handed out by the token
 endpoint after a successful password check and reused on later logins.
 */
