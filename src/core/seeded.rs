//! The "Seeded Data Tests" folder prepended to the collection.

use crate::domain::model::{Body, Event, Folder, Header, RequestItem, RequestSpec, RequestUrl, Script};

pub const SEEDED_FOLDER_NAME: &str = "Seeded Data Tests";

const BASE_URL: &str = "{{base_url}}";
const AUTH_TOKEN: &str = "{{auth_token}}";

const ALICE_CONTACT_ID: &str = "550e8400-e29b-41d4-a716-446655440001";
const BOB_CONTACT_ID: &str = "550e8400-e29b-41d4-a716-446655440002";
const CHARLIE_CONTACT_ID: &str = "550e8400-e29b-41d4-a716-446655440003";
const ALICE_NY_ADDRESS_ID: &str = "660e8400-e29b-41d4-a716-446655440001";

pub fn seeded_folder() -> Folder {
    Folder {
        name: SEEDED_FOLDER_NAME.to_string(),
        item: vec![
            login("john.doe", "password123"),
            login("jane.smith", "SecurePass456!"),
            get_contact("Alice Johnson", ALICE_CONTACT_ID),
            get_contact("Bob Williams", BOB_CONTACT_ID),
            get_contact("Charlie Brown", CHARLIE_CONTACT_ID),
            authorized(
                "List Addresses for Alice Johnson",
                "GET",
                &["api", "contacts", ALICE_CONTACT_ID, "addresses"],
                None,
                "List all addresses for Alice Johnson (should return 2 addresses)",
            ),
            authorized(
                "Get Seeded Address - Alice's NY Address",
                "GET",
                &["api", "contacts", ALICE_CONTACT_ID, "addresses", ALICE_NY_ADDRESS_ID],
                None,
                "Get Alice's NY address (123 Main Street, New York)",
            ),
            authorized(
                "Update Seeded Contact - Alice Johnson",
                "PUT",
                &["api", "contacts", ALICE_CONTACT_ID],
                Some(
                    "{\n  \"first_name\": \"Alice Updated\",\n  \"last_name\": \"Johnson Updated\",\n  \"email\": \"alice.updated@example.com\",\n  \"phone\": \"+1-555-9999\"\n}",
                ),
                "Update Alice Johnson's information",
            ),
        ],
    }
}

fn url(path: &[&str]) -> RequestUrl {
    RequestUrl {
        raw: format!("{}/{}", BASE_URL, path.join("/")),
        host: vec![BASE_URL.to_string()],
        path: path.iter().map(|segment| segment.to_string()).collect(),
    }
}

/// Stores `data.token` from a login response as the `auth_token` variable.
fn store_token_event() -> Event {
    Event {
        listen: "test".to_string(),
        script: Script {
            exec: vec![
                "var jsonData = pm.response.json();".to_string(),
                "if (jsonData.data && jsonData.data.token) {".to_string(),
                "    pm.environment.set(\"auth_token\", jsonData.data.token);".to_string(),
                "}".to_string(),
            ],
            kind: "text/javascript".to_string(),
        },
    }
}

fn login(user_id: &str, password: &str) -> RequestItem {
    RequestItem {
        name: format!("Login as {}", user_id),
        event: Some(vec![store_token_event()]),
        request: RequestSpec {
            method: "POST".to_string(),
            header: vec![Header::new("Content-Type", "application/json")],
            body: Some(Body::raw(&format!(
                "{{\n  \"id\": \"{}\",\n  \"password\": \"{}\"\n}}",
                user_id, password
            ))),
            url: url(&["api", "users", "_login"]),
            description: Some(format!("Login with seeded user {}", user_id)),
        },
        response: vec![],
    }
}

fn get_contact(contact: &str, contact_id: &str) -> RequestItem {
    authorized(
        &format!("Get Seeded Contact - {}", contact),
        "GET",
        &["api", "contacts", contact_id],
        None,
        &format!("Get {} (seeded contact for john.doe)", contact),
    )
}

fn authorized(
    name: &str,
    method: &str,
    path: &[&str],
    raw_body: Option<&str>,
    description: &str,
) -> RequestItem {
    let mut header = vec![Header::new("Authorization", AUTH_TOKEN)];
    if raw_body.is_some() {
        header.push(Header::new("Content-Type", "application/json"));
    }

    RequestItem {
        name: name.to_string(),
        event: None,
        request: RequestSpec {
            method: method.to_string(),
            header,
            body: raw_body.map(Body::raw),
            url: url(path),
            description: Some(description.to_string()),
        },
        response: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_folder_shape() {
        let folder = seeded_folder();
        assert_eq!(folder.name, "Seeded Data Tests");
        assert_eq!(folder.item.len(), 8);

        let with_scripts: Vec<&str> = folder
            .item
            .iter()
            .filter(|item| item.event.is_some())
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(with_scripts, ["Login as john.doe", "Login as jane.smith"]);
        assert!(folder.item.iter().all(|item| item.response.is_empty()));
    }

    #[test]
    fn test_login_request() {
        let folder = seeded_folder();
        let jane = &folder.item[1].request;
        assert_eq!(jane.method, "POST");
        assert_eq!(jane.url.raw, "{{base_url}}/api/users/_login");
        assert_eq!(jane.url.path, ["api", "users", "_login"]);
        assert_eq!(
            jane.body.as_ref().unwrap().raw,
            "{\n  \"id\": \"jane.smith\",\n  \"password\": \"SecurePass456!\"\n}"
        );
        assert_eq!(jane.description.as_deref(), Some("Login with seeded user jane.smith"));
    }

    #[test]
    fn test_address_request() {
        let folder = seeded_folder();
        let address = &folder.item[6];
        assert_eq!(address.name, "Get Seeded Address - Alice's NY Address");
        assert_eq!(
            address.request.url.raw,
            "{{base_url}}/api/contacts/550e8400-e29b-41d4-a716-446655440001/addresses/660e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(address.request.header, [Header::new("Authorization", "{{auth_token}}")]);
        assert!(address.request.body.is_none());
    }

    #[test]
    fn test_update_request_headers() {
        let folder = seeded_folder();
        let update = &folder.item[7].request;
        assert_eq!(update.method, "PUT");
        assert_eq!(
            update.header,
            [
                Header::new("Authorization", "{{auth_token}}"),
                Header::new("Content-Type", "application/json"),
            ]
        );
        assert!(update.body.as_ref().unwrap().raw.contains("alice.updated@example.com"));
    }
}
