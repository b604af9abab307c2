//! Tests for mapping expansion after `SET` and `ON DUPLICATE KEY UPDATE`.

mod common;
use common::*;

use oxide_sqlstring::{format, params, sql_map, Raw, SqlValue};

#[test]
fn update_with_dynamic_table_and_mapping() {
    assert_eq!(
        fmt(
            "UPDATE ?? SET ? WHERE id = ?",
            &params!["users", sql_map! { "name" => "John", "age" => 30 }, 42]
        ),
        "UPDATE `users` SET `name` = 'John', `age` = 30 WHERE id = 42"
    );
}

#[test]
fn mapping_with_raw_values() {
    assert_eq!(
        fmt(
            "UPDATE ?? SET ? WHERE id = ?",
            &params![
                "posts",
                sql_map! { "title" => "Hello", "updated_at" => Raw::new("NOW()") },
                1,
            ]
        ),
        "UPDATE `posts` SET `title` = 'Hello', `updated_at` = NOW() WHERE id = 1"
    );
}

#[test]
fn on_duplicate_key_update() {
    assert_eq!(
        fmt(
            "INSERT INTO counters (id, count) VALUES (?, ?) ON DUPLICATE KEY UPDATE ?",
            &params![
                1,
                0,
                sql_map! { "count" => Raw::new("count + 1"), "updated_at" => Raw::new("NOW()") },
            ]
        ),
        "INSERT INTO counters (id, count) VALUES (1, 0) ON DUPLICATE KEY UPDATE `count` = count + 1, `updated_at` = NOW()"
    );
}

#[test]
fn set_and_key_update_both_expand() {
    let insert = sql_map! {
        "aula" => "Math101",
        "fecha" => "2024-01-15",
        "texto" => "Lesson content",
        "tipo" => "lecture",
        "imagen" => "image.png",
        "file" => "notes.pdf",
    };
    let update = sql_map! {
        "texto" => "Lesson content",
        "imagen" => "image.png",
        "file" => "notes.pdf",
    };
    assert_eq!(
        fmt(
            "INSERT INTO column SET ? ON DUPLICATE KEY UPDATE ?",
            &params![insert, update]
        ),
        "INSERT INTO column SET `aula` = 'Math101', `fecha` = '2024-01-15', `texto` = 'Lesson content', `tipo` = 'lecture', `imagen` = 'image.png', `file` = 'notes.pdf' ON DUPLICATE KEY UPDATE `texto` = 'Lesson content', `imagen` = 'image.png', `file` = 'notes.pdf'"
    );
}

#[test]
fn default_options_expand() {
    assert_eq!(
        format("UPDATE t SET ?", &params![sql_map! { "a" => 1, "b" => "x" }]),
        "UPDATE t SET `a` = 1, `b` = 'x'"
    );
}

#[test]
fn null_values_in_mapping() {
    assert_eq!(
        fmt(
            "INSERT INTO t (id) VALUES (?) ON DUPLICATE KEY UPDATE ?",
            &params![1, sql_map! { "value" => SqlValue::Null, "name" => "x" }]
        ),
        "INSERT INTO t (id) VALUES (1) ON DUPLICATE KEY UPDATE `value` = NULL, `name` = 'x'"
    );
}

#[test]
fn multiline_set() {
    assert_eq!(
        fmt(
            "UPDATE users\n  SET ?\n  WHERE id = ?",
            &params![sql_map! { "name" => "foo", "email" => "bar@test.com" }, 1]
        ),
        "UPDATE users\n  SET `name` = 'foo', `email` = 'bar@test.com'\n  WHERE id = 1"
    );
}

#[test]
fn comments_around_set() {
    assert_eq!(
        fmt(
            "-- Update user profile\nUPDATE users\nSET ? /* apply changes */\nWHERE id = ?",
            &params![sql_map! { "name" => "foo", "active" => true }, 1]
        ),
        "-- Update user profile\nUPDATE users\nSET `name` = 'foo', `active` = true /* apply changes */\nWHERE id = 1"
    );
}

#[test]
fn mapping_away_from_clause_is_stringified() {
    assert_eq!(
        fmt("?", &params![sql_map! { "hello" => "world" }]),
        "'[object Object]'"
    );
    assert_eq!(
        fmt("SELECT *\n  FROM users\n  WHERE email = ?", &params![sql_map! { "email" => 1 }]),
        "SELECT *\n  FROM users\n  WHERE email = '[object Object]'"
    );
}

#[test]
fn password_object_injection() {
    let sql = "SELECT * FROM `users` WHERE `username` = ? AND `password` = ?";
    let values = params!["admin", sql_map! { "password" => true }];
    let expected =
        "SELECT * FROM `users` WHERE `username` = 'admin' AND `password` = '[object Object]'";

    assert_eq!(format(sql, &values), expected);
    assert_eq!(fmt(sql, &values), expected);
    assert_eq!(fmt_stringified(sql, &values), expected);
}

#[test]
fn set_used_as_a_column_name() {
    assert_eq!(
        fmt(
            "SELECT * FROM t WHERE SET = ? AND id = ?",
            &params!["x", sql_map! { "id" => 1 }]
        ),
        "SELECT * FROM t WHERE SET = 'x' AND id = '[object Object]'"
    );
}

#[test]
fn set_inside_comments_and_strings() {
    assert_eq!(
        fmt(
            "SELECT * FROM users -- TODO: SET config later\n WHERE email = ?",
            &params![sql_map! { "email" => 1 }]
        ),
        "SELECT * FROM users -- TODO: SET config later\n WHERE email = '[object Object]'"
    );
    assert_eq!(
        fmt(
            "/* SET placeholder for future use */ SELECT * FROM users WHERE email = ?",
            &params![sql_map! { "email" => 1 }]
        ),
        "/* SET placeholder for future use */ SELECT * FROM users WHERE email = '[object Object]'"
    );
    assert_eq!(
        fmt(
            "SELECT * FROM logs WHERE message = 'SET value' AND user_id = ?",
            &params![sql_map! { "user_id" => 1 }]
        ),
        "SELECT * FROM logs WHERE message = 'SET value' AND user_id = '[object Object]'"
    );
    assert_eq!(
        fmt(
            "/* KEY UPDATE logic pending */ SELECT * FROM users WHERE id = ?",
            &params![sql_map! { "id" => 42 }]
        ),
        "/* KEY UPDATE logic pending */ SELECT * FROM users WHERE id = '[object Object]'"
    );
}

#[test]
fn set_like_words() {
    assert_eq!(
        fmt(
            "SELECT * FROM items LIMIT 10 OFFSET ? WHERE category = ?",
            &params![5, sql_map! { "category" => "books" }]
        ),
        "SELECT * FROM items LIMIT 10 OFFSET 5 WHERE category = '[object Object]'"
    );
    assert_eq!(
        fmt(
            "SELECT * FROM pages WHERE CHARSET = 'utf8' AND meta = ?",
            &params![sql_map! { "key" => "value" }]
        ),
        "SELECT * FROM pages WHERE CHARSET = 'utf8' AND meta = '[object Object]'"
    );
}

#[test]
fn stringify_objects_never_expands() {
    assert_eq!(
        fmt_stringified("UPDATE t SET ?", &params![sql_map! { "a" => 1 }]),
        "UPDATE t SET '[object Object]'"
    );
    assert_eq!(
        fmt_stringified("?", &params![Raw::new("@foo")]),
        "@foo"
    );
}

#[test]
fn session_variables_are_scalars() {
    assert_eq!(
        fmt(
            "SET @current_user_id = ?, @current_user_ip = ?",
            &params![42, "192.168.1.100"]
        ),
        "SET @current_user_id = 42, @current_user_ip = '192.168.1.100'"
    );
}

#[test]
fn nested_mappings_are_not_expanded() {
    assert_eq!(
        fmt(
            "UPDATE t SET ?",
            &params![sql_map! { "a" => sql_map! { "nested" => true } }]
        ),
        "UPDATE t SET `a` = '[object Object]'"
    );
}

#[test]
fn function_entries_are_skipped() {
    assert_eq!(
        fmt(
            "UPDATE t SET ?",
            &params![sql_map! {
                "name" => "foo",
                "fn" => SqlValue::Function(String::from("() => {}")),
            }]
        ),
        "UPDATE t SET `name` = 'foo'"
    );
}

#[test]
fn empty_mapping_expands_to_nothing() {
    assert_eq!(fmt("UPDATE t SET ?", &params![sql_map! {}]), "UPDATE t SET ");
}
