//! Rewrites sample request bodies so they match the seeded users.

use crate::core::PatchReport;
use crate::domain::model::ItemKind;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPatch {
    pub name: &'static str,
    pub raw_body: &'static str,
    pub description: Option<&'static str>,
}

pub const REQUEST_PATCHES: &[RequestPatch] = &[
    RequestPatch {
        name: "Register User - Success",
        raw_body: "{\n  \"id\": \"test.user\",\n  \"password\": \"TestPass123!\",\n  \"name\": \"Test User\"\n}",
        description: None,
    },
    RequestPatch {
        name: "Register User - Duplicate ID",
        raw_body: "{\n  \"id\": \"john.doe\",\n  \"password\": \"password123\",\n  \"name\": \"John Doe Duplicate\"\n}",
        description: Some(
            "Try to register with duplicate user ID (john.doe already exists in seed data)",
        ),
    },
    RequestPatch {
        name: "Login - Success",
        raw_body: "{\n  \"id\": \"john.doe\",\n  \"password\": \"password123\"\n}",
        description: None,
    },
    RequestPatch {
        name: "Login - Invalid Credentials",
        raw_body: "{\n  \"id\": \"john.doe\",\n  \"password\": \"WrongPassword\"\n}",
        description: None,
    },
];

pub fn patch_for(name: &str) -> Option<&'static RequestPatch> {
    REQUEST_PATCHES.iter().find(|patch| patch.name == name)
}

/// Walk `items` depth-first and apply the matching patch to every request.
pub fn patch_items(items: &mut [Value]) -> PatchReport {
    let mut report = PatchReport::default();
    walk(items, &mut report);
    report
}

fn walk(items: &mut [Value], report: &mut PatchReport) {
    for item in items.iter_mut() {
        let Some(map) = item.as_object_mut() else {
            tracing::debug!("Skipping non-object entry in item list");
            continue;
        };

        match ItemKind::classify(map) {
            ItemKind::Group(nested) => {
                report.groups_visited += 1;
                match nested.as_array_mut() {
                    Some(children) => walk(children, report),
                    None => tracing::debug!("Skipping folder whose \"item\" is not an array"),
                }
            }
            ItemKind::Request { name, request } => {
                report.requests_visited += 1;
                if let Some(patch) = patch_for(&name) {
                    if apply(patch, request) {
                        tracing::debug!("Patched request '{}'", name);
                        report.patched.push(name);
                    } else {
                        tracing::debug!("Request '{}' has no raw body, left as is", name);
                    }
                }
            }
            ItemKind::Other => {}
        }
    }
}

/// Returns false when the request has no `body.raw` to overwrite.
fn apply(patch: &RequestPatch, request: &mut Value) -> bool {
    let Some(request) = request.as_object_mut() else {
        return false;
    };

    let has_raw = request
        .get("body")
        .and_then(Value::as_object)
        .is_some_and(|body| body.contains_key("raw"));
    if !has_raw {
        return false;
    }

    if let Some(body) = request.get_mut("body").and_then(Value::as_object_mut) {
        body.insert("raw".to_string(), Value::String(patch.raw_body.to_string()));
    }
    if let Some(description) = patch.description {
        request.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
    }
    true
}
