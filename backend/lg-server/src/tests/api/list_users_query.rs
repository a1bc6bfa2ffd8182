use crate::{ApiError, ListUsersQuery};

use lg_auth::UserFilter;

use googletest::prelude::*;

fn query(is_guest: Option<&str>, is_admin: Option<&str>) -> ListUsersQuery {
    ListUsersQuery {
        is_guest: is_guest.map(str::to_string),
        is_admin: is_admin.map(str::to_string),
    }
}

#[gtest]
fn given_no_flags_when_converting_then_all_users() {
    assert_that!(query(None, None).into_filter(), ok(eq(UserFilter::All)));
}

#[gtest]
fn given_guest_flag_when_converting_then_guest_filter() {
    assert_that!(
        query(Some("true"), None).into_filter(),
        ok(eq(UserFilter::Guest(true)))
    );
    assert_that!(
        query(Some("false"), None).into_filter(),
        ok(eq(UserFilter::Guest(false)))
    );
}

#[gtest]
fn given_admin_flag_when_converting_then_admin_filter() {
    assert_that!(
        query(None, Some("true")).into_filter(),
        ok(eq(UserFilter::Admin(true)))
    );
}

#[gtest]
fn given_both_flags_when_converting_then_guest_flag_wins() {
    assert_that!(
        query(Some("false"), Some("true")).into_filter(),
        ok(eq(UserFilter::Guest(false)))
    );
}

#[gtest]
fn given_non_boolean_flag_when_converting_then_field_error() {
    let result = query(Some("yes"), None).into_filter();

    match result {
        Err(ApiError::Validation { fields, .. }) => {
            assert_eq!(
                fields.get("isGuest"),
                Some(&["isGuest must be true or false".to_string()][..])
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
