mod common;

use common::test_jwt_config;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use quizbank::config::jwt::JwtConfig;
use quizbank::modules::accounts::model::AccountRole;
use quizbank::utils::jwt::{AuthError, create_access_token, verify_token};
use uuid::Uuid;

#[test]
fn test_create_access_token_success() {
    let jwt_config = test_jwt_config();
    let account_id = Uuid::new_v4();

    let result = create_access_token(account_id, "alice", AccountRole::User, false, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_round_trip_preserves_claims() {
    let jwt_config = test_jwt_config();
    let account_id = Uuid::new_v4();

    let token =
        create_access_token(account_id, "alice", AccountRole::Admin, true, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.user_id, account_id.to_string());
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, AccountRole::Admin);
    assert!(claims.banned);
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = test_jwt_config();

    let token = create_access_token(
        Uuid::new_v4(),
        "alice",
        AccountRole::User,
        false,
        &jwt_config,
    )
    .unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = test_jwt_config();

    let token = create_access_token(
        Uuid::new_v4(),
        "alice",
        AccountRole::User,
        false,
        &jwt_config,
    )
    .unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    let result = verify_token(&token, &wrong_jwt_config);

    assert!(matches!(result, Err(AuthError::InvalidSignature)));
}

#[test]
fn test_verify_token_tampered_payload() {
    let jwt_config = test_jwt_config();

    let token_a = create_access_token(
        Uuid::new_v4(),
        "alice",
        AccountRole::User,
        false,
        &jwt_config,
    )
    .unwrap();
    let token_b = create_access_token(
        Uuid::new_v4(),
        "mallory",
        AccountRole::Admin,
        false,
        &jwt_config,
    )
    .unwrap();

    // Splice the admin payload onto the user token's signature.
    let parts_a: Vec<&str> = token_a.split('.').collect();
    let parts_b: Vec<&str> = token_b.split('.').collect();
    let tampered = format!("{}.{}.{}", parts_a[0], parts_b[1], parts_a[2]);

    let result = verify_token(&tampered, &jwt_config);

    assert!(matches!(result, Err(AuthError::InvalidSignature)));
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = test_jwt_config();
    let token = common::make_expired_token(&jwt_config);

    let result = verify_token(&token, &jwt_config);

    assert!(matches!(result, Err(AuthError::ExpiredToken)));
}

#[test]
fn test_verify_token_wrong_algorithm() {
    let jwt_config = test_jwt_config();
    let now = chrono::Utc::now().timestamp() as usize;

    let token = encode(
        &Header::new(Algorithm::HS384),
        &serde_json::json!({
            "userId": Uuid::new_v4().to_string(),
            "username": "alice",
            "role": "user",
            "banned": false,
            "iat": now,
            "exp": now + 3600,
        }),
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let result = verify_token(&token, &jwt_config);

    assert!(matches!(result, Err(AuthError::InvalidSignature)));
}

#[test]
fn test_verify_token_missing_claims() {
    let jwt_config = test_jwt_config();
    let now = chrono::Utc::now().timestamp() as usize;

    // No userId and no role.
    let token = encode(
        &Header::default(),
        &serde_json::json!({
            "username": "alice",
            "iat": now,
            "exp": now + 3600,
        }),
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let result = verify_token(&token, &jwt_config);

    assert!(matches!(result, Err(AuthError::MalformedToken)));
}

#[test]
fn test_verify_token_unknown_role() {
    let jwt_config = test_jwt_config();
    let now = chrono::Utc::now().timestamp() as usize;

    let token = encode(
        &Header::default(),
        &serde_json::json!({
            "userId": Uuid::new_v4().to_string(),
            "username": "alice",
            "role": "superuser",
            "iat": now,
            "exp": now + 3600,
        }),
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let result = verify_token(&token, &jwt_config);

    assert!(matches!(result, Err(AuthError::MalformedToken)));
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert!(result.is_err(), "expected error for token {:?}", token);
    }
}

#[test]
fn test_create_token_different_accounts_different_tokens() {
    let jwt_config = test_jwt_config();
    let id1 = Uuid::new_v4();
    let id2 = Uuid::new_v4();

    let token1 = create_access_token(id1, "alice", AccountRole::User, false, &jwt_config).unwrap();
    let token2 = create_access_token(id2, "bob", AccountRole::User, false, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.user_id, id1.to_string());
    assert_eq!(claims2.user_id, id2.to_string());
}
