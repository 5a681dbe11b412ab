use web_sys::window;

const USER_ID_KEY: &str = "fleet_user_id";
const ANONYMOUS_PREFIX: &str = "anon-";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the user id from localStorage
pub fn get_user_id() -> Option<String> {
    get_local_storage()?
        .get_item(USER_ID_KEY)
        .ok()?
        .filter(|id| !id.trim().is_empty())
}

/// Save the user id to localStorage
pub fn save_user_id(id: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USER_ID_KEY, id);
    }
}

pub fn anonymous_user_id(seed: uuid::Uuid) -> String {
    format!("{}{}", ANONYMOUS_PREFIX, seed)
}

/// Id that scopes persisted filter state. A browser without a stored id
/// gets a fresh anonymous one, which is kept for later sessions.
pub fn current_user_id() -> String {
    if let Some(id) = get_user_id() {
        return id;
    }
    let id = anonymous_user_id(uuid::Uuid::new_v4());
    log::info!("No stored user id, using {}", id);
    save_user_id(&id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_user_id() {
        let id = anonymous_user_id(uuid::Uuid::nil());
        assert_eq!(id, "anon-00000000-0000-0000-0000-000000000000");
        assert!(id.starts_with(ANONYMOUS_PREFIX));
    }
}
