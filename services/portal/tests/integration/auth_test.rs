use uuid::Uuid;

use campus_domain::policy::{Actor, Capability, PermissiveAccessPolicy, RecordScope};
use campus_domain::role::Role;
use campus_portal::error::PortalError;
use campus_portal::usecase::auth::{
    ResolveSessionUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, authenticate,
    authorize, issue_session_token,
};
use campus_testing::auth::{mint_expired_token, mint_session_token};

use crate::helpers::{DenyAllPolicy, MockUserRepo, TEST_JWT_SECRET, TEST_PASSWORD, test_user};

// ── issue_session_token / authenticate ───────────────────────────────────────

#[tokio::test]
async fn should_issue_session_token_that_authenticates_successfully() {
    let user = test_user("student@example.com", Role::Student);
    let (token, exp) = issue_session_token(&user, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());
    assert!(exp > 0);

    let actor = authenticate(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(actor.user_id, user.id);
    assert_eq!(actor.role, Role::Student);
}

#[tokio::test]
async fn should_reject_token_signed_with_wrong_secret() {
    let user = test_user("student@example.com", Role::Student);
    let (token, _) = issue_session_token(&user, TEST_JWT_SECRET).unwrap();

    let result = authenticate(&token, "wrong-secret");
    assert!(
        matches!(result, Err(PortalError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_garbage_token_string() {
    let result = authenticate("not-a-jwt", TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(PortalError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_token() {
    let user = test_user("student@example.com", Role::Student);
    let token = mint_expired_token(user.id, &user.email, user.role, TEST_JWT_SECRET);

    let result = authenticate(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(PortalError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_authenticate_token_minted_by_test_helper() {
    let user = test_user("teacher@example.com", Role::Teacher);
    let token = mint_session_token(user.id, &user.email, user.role, TEST_JWT_SECRET);

    let actor = authenticate(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(actor.user_id, user.id);
    assert_eq!(actor.role, Role::Teacher);
}

// ── SignUpUseCase ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_sign_up_and_issue_valid_token() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();
    let usecase = SignUpUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase
        .execute(SignUpInput {
            email: "new.student@example.com".to_owned(),
            password: "super-secret".to_owned(),
            full_name: "Alex Kim".to_owned(),
            role: Role::Student,
            department: Some("Mathematics".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(out.user.email, "new.student@example.com");
    assert_eq!(out.user.role, Role::Student);
    assert_eq!(out.user.department.as_deref(), Some("Mathematics"));
    assert!(out.token_exp > 0);

    let actor = authenticate(&out.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(actor.user_id, out.user.id);

    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, out.user.id);
}

#[tokio::test]
async fn should_hash_password_on_sign_up() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();
    let usecase = SignUpUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    usecase
        .execute(SignUpInput {
            email: "new.student@example.com".to_owned(),
            password: "plain-text-pw".to_owned(),
            full_name: "Alex Kim".to_owned(),
            role: Role::Student,
            department: None,
        })
        .await
        .unwrap();

    let users = users_handle.lock().unwrap();
    assert_ne!(users[0].password_hash, "plain-text-pw");
    assert!(bcrypt::verify("plain-text-pw", &users[0].password_hash).unwrap());
}

#[tokio::test]
async fn should_lowercase_email_on_sign_up() {
    let usecase = SignUpUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase
        .execute(SignUpInput {
            email: "Upper.Case@Example.COM".to_owned(),
            password: "super-secret".to_owned(),
            full_name: "Alex Kim".to_owned(),
            role: Role::Teacher,
            department: None,
        })
        .await
        .unwrap();

    assert_eq!(out.user.email, "upper.case@example.com");
}

#[tokio::test]
async fn should_reject_blank_full_name() {
    let usecase = SignUpUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(SignUpInput {
            email: "someone@example.com".to_owned(),
            password: "super-secret".to_owned(),
            full_name: "   ".to_owned(),
            role: Role::Student,
            department: None,
        })
        .await;

    assert!(
        matches!(result, Err(PortalError::MissingFields)),
        "expected MissingFields, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_email_without_at() {
    let usecase = SignUpUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(SignUpInput {
            email: "not-an-email".to_owned(),
            password: "super-secret".to_owned(),
            full_name: "Alex Kim".to_owned(),
            role: Role::Student,
            department: None,
        })
        .await;

    assert!(
        matches!(result, Err(PortalError::InvalidEmail)),
        "expected InvalidEmail, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_short_password() {
    let usecase = SignUpUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(SignUpInput {
            email: "someone@example.com".to_owned(),
            password: "12345".to_owned(),
            full_name: "Alex Kim".to_owned(),
            role: Role::Student,
            department: None,
        })
        .await;

    assert!(
        matches!(result, Err(PortalError::PasswordTooShort)),
        "expected PasswordTooShort, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let existing = test_user("taken@example.com", Role::Teacher);
    let repo = MockUserRepo::new(vec![existing]);
    let users_handle = repo.users_handle();
    let usecase = SignUpUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    // Mixed case still collides with the stored lowercased address.
    let result = usecase
        .execute(SignUpInput {
            email: "Taken@Example.com".to_owned(),
            password: "super-secret".to_owned(),
            full_name: "Alex Kim".to_owned(),
            role: Role::Student,
            department: None,
        })
        .await;

    assert!(
        matches!(result, Err(PortalError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );
    assert_eq!(users_handle.lock().unwrap().len(), 1);
}

// ── SignInUseCase ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_sign_in_with_correct_credentials() {
    let user = test_user("student@example.com", Role::Student);
    let usecase = SignInUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase
        .execute(SignInInput {
            email: "student@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.user.id, user.id);

    let actor = authenticate(&out.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(actor.user_id, user.id);
}

#[tokio::test]
async fn should_sign_in_with_differently_cased_email() {
    let user = test_user("student@example.com", Role::Student);
    let usecase = SignInUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase
        .execute(SignInInput {
            email: "STUDENT@Example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.user.id, user.id);
}

#[tokio::test]
async fn should_reject_unknown_email_on_sign_in() {
    let usecase = SignInUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(SignInInput {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(PortalError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_password_on_sign_in() {
    let user = test_user("student@example.com", Role::Student);
    let usecase = SignInUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(SignInInput {
            email: "student@example.com".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(PortalError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let user = test_user("student@example.com", Role::Student);
    let usecase = SignInUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let unknown_email = usecase
        .execute(SignInInput {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap_err();
    let wrong_password = usecase
        .execute(SignInInput {
            email: "student@example.com".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await
        .unwrap_err();

    // The two failure modes must be indistinguishable on the wire.
    assert_eq!(unknown_email.kind(), wrong_password.kind());
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
}

// ── ResolveSessionUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_session_to_account() {
    let user = test_user("student@example.com", Role::Student);
    let token = mint_session_token(user.id, &user.email, user.role, TEST_JWT_SECRET);

    let usecase = ResolveSessionUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let resolved = usecase.execute(&token).await.unwrap();
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);
}

#[tokio::test]
async fn should_reject_session_for_vanished_account() {
    let user = test_user("student@example.com", Role::Student);
    let token = mint_session_token(user.id, &user.email, user.role, TEST_JWT_SECRET);

    let usecase = ResolveSessionUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&token).await;
    assert!(
        matches!(result, Err(PortalError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_session() {
    let user = test_user("student@example.com", Role::Student);
    let token = mint_expired_token(user.id, &user.email, user.role, TEST_JWT_SECRET);

    let usecase = ResolveSessionUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&token).await;
    assert!(
        matches!(result, Err(PortalError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

// ── authorize ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_allow_under_permissive_policy() {
    let actor = Actor {
        user_id: Uuid::new_v4(),
        role: Role::Student,
    };
    let result = authorize(
        &PermissiveAccessPolicy,
        &actor,
        Capability::ReadGrades,
        &RecordScope::default(),
    );
    assert!(result.is_ok());
}

#[tokio::test]
async fn should_return_forbidden_under_deny_all_policy() {
    let actor = Actor {
        user_id: Uuid::new_v4(),
        role: Role::Admin,
    };
    let result = authorize(
        &DenyAllPolicy,
        &actor,
        Capability::WriteCourses,
        &RecordScope::default(),
    );
    assert!(
        matches!(result, Err(PortalError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}
