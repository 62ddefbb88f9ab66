use rent_wizard::user::{SafeUser, User};
use serde_json::{json, Value};

#[test]
fn backend_user_json_projects_to_safe_user() {
    let raw = json!({
        "id": "64b7f0c2a1",
        "name": "Rui",
        "email": "rui@example.com",
        "emailVerified": "2023-05-02T09:15:30.250Z",
        "image": null,
        "hashedPassword": null,
        "createdAt": "2023-05-01T12:00:00Z",
        "updatedAt": "2023-05-03T18:45:10.5Z",
        "favoriteIds": ["listing-1", "listing-2"]
    });
    let user: User = serde_json::from_value(raw).unwrap();
    let safe = SafeUser::from(&user);

    let value: Value = serde_json::to_value(&safe).unwrap();
    assert_eq!(value["createdAt"], "2023-05-01T12:00:00.000Z");
    assert_eq!(value["updatedAt"], "2023-05-03T18:45:10.500Z");
    assert_eq!(value["emailVerified"], "2023-05-02T09:15:30.250Z");
    assert_eq!(value["favoriteIds"], json!(["listing-1", "listing-2"]));
    assert_eq!(value["image"], Value::Null);
}

#[test]
fn favorites_default_to_empty() {
    let user: User = serde_json::from_value(json!({
        "id": "u1",
        "name": null,
        "email": null,
        "emailVerified": null,
        "image": null,
        "hashedPassword": null,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert!(SafeUser::from(user).favorite_ids.is_empty());
}
