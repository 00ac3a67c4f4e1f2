use crate::cli::utils::*;
use crate::db::{ListResult, Page, Property, Service};

#[test]
fn test_truncate_with_ellipsis_short_string() {
    let result = truncate_with_ellipsis("hello", 10);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_long_string() {
    let result = truncate_with_ellipsis("hello world this is a long string", 10);
    assert_eq!(result, "hello w...");
}

#[test]
fn test_truncate_with_ellipsis_unicode() {
    let result = truncate_with_ellipsis("hello 世界", 8);
    assert_eq!(result, "hello 世界");

    let result2 = truncate_with_ellipsis("hello 世界", 7);
    assert_eq!(result2, "hell...");
}

#[test]
fn test_records_table_uses_field_labels() {
    let services = vec![Service::new("mow", "Lawn mowing", 50.0)];
    let output = records_table(&services);

    assert!(output.contains("Description"));
    assert!(output.contains("Price"));
    assert!(output.contains("Lawn mowing"));
    assert!(output.contains("50.00"));
}

#[test]
fn test_records_table_hides_secret_fields() {
    let mut person = crate::db::Person::new(
        "jdoe",
        "Jane",
        "Doe",
        "jane@example.com",
        "555-0100",
        "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8",
    );
    person.id = 2;
    let output = records_table(&[person]);

    assert!(output.contains("jdoe"));
    assert!(!output.contains("Password"));
    assert!(!output.contains("5e884898"));
}

#[test]
fn test_format_list_empty_table() {
    let result: ListResult<Property> = ListResult::new(vec![], 0, Page::default());
    let output = format_list(&result, OutputFormat::Table, "properties").unwrap();
    assert_eq!(output, "No properties found.");
}

#[test]
fn test_format_list_reports_page_position() {
    let mut property = Property::new("1 Elm St", "Springfield", "IL", "62701");
    property.id = 11;
    let result = ListResult::new(vec![property], 11, Page::number(2, 10));
    let output = format_list(&result, OutputFormat::Table, "properties").unwrap();

    assert!(output.contains("1 Elm St"));
    assert!(output.contains("Page 2 of 2 (11 properties total)"));
}

#[test]
fn test_format_list_json_includes_total() {
    let result = ListResult::new(
        vec![Service::new("mow", "Lawn mowing", 50.0)],
        1,
        Page::default(),
    );
    let output = format_list(&result, OutputFormat::Json, "services").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["total"], 1);
    assert_eq!(parsed["items"][0]["id"], "mow");
}

#[test]
fn test_detail_table_renders_rows() {
    let output = detail_table([("Cost", "80.00".to_string()), ("Pending", "yes".to_string())]);
    assert!(output.contains("Field"));
    assert!(output.contains("Cost"));
    assert!(output.contains("80.00"));
}
