use chrono::TimeZone;
use chrono::Utc;
use num_bigint::BigInt;
use seon::{
    ContainerType, Error, PrettyWriter, Scalar, SeonType, StructuralError, WriterOptions,
};

fn pretty() -> PrettyWriter {
    PrettyWriter::new(WriterOptions::default())
}

fn compact() -> PrettyWriter {
    PrettyWriter::new(WriterOptions::compact())
}

fn finish(writer: PrettyWriter) -> String {
    writer.into_string().unwrap()
}

#[test]
fn test_top_level_values_newline_separated() {
    let mut writer = pretty();
    writer.write_int(1).unwrap();
    writer.write_int(2).unwrap();
    assert_eq!(finish(writer), "1\n2");
}

#[test]
fn test_list_layout() {
    let mut writer = pretty();
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[\n  1,\n  2\n]");
}

#[test]
fn test_struct_layout() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("a").unwrap();
    writer.write_int(1).unwrap();
    writer.write_field_name("b").unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "{\n  a: 1,\n  b: 2\n}");
}

#[test]
fn test_sexp_layout() {
    let mut writer = pretty();
    writer.step_in(ContainerType::SExp).unwrap();
    writer.write_int(1).unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "(\n  1\n  2\n)");
}

#[test]
fn test_empty_containers_stay_on_one_line() {
    for (container, expected) in [
        (ContainerType::List, "[]"),
        (ContainerType::SExp, "()"),
        (ContainerType::Struct, "{}"),
    ] {
        let mut writer = pretty();
        writer.step_in(container).unwrap();
        writer.step_out().unwrap();
        assert_eq!(finish(writer), expected);
    }
}

#[test]
fn test_nested_empty_containers() {
    let mut writer = pretty();
    writer.step_in(ContainerType::List).unwrap();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.step_out().unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[\n  {}\n]");

    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("a").unwrap();
    writer.step_in(ContainerType::SExp).unwrap();
    writer.step_out().unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "{\n  a: ()\n}");
}

#[test]
fn test_empty_list_between_elements() {
    let mut writer = pretty();
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.step_in(ContainerType::List).unwrap();
    writer.step_out().unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[\n  1,\n  []\n]");
}

#[test]
fn test_compact_layouts() {
    let mut writer = compact();
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[1,2]");

    let mut writer = compact();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("a").unwrap();
    writer.write_int(1).unwrap();
    writer.write_field_name("b").unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "{a:1,b:2}");

    let mut writer = compact();
    writer.step_in(ContainerType::SExp).unwrap();
    writer.write_int(1).unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "(1 2)");
}

#[test]
fn test_compact_keeps_top_level_newlines() {
    let mut writer = compact();
    writer.write_int(1).unwrap();
    writer.write_int(2).unwrap();
    assert_eq!(finish(writer), "1\n2");
}

#[test]
fn test_prettify_depth_flattens_deep_containers() {
    let mut writer = PrettyWriter::new(WriterOptions::new().with_prettify_depth(1));
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[1,2]");

    let mut writer = PrettyWriter::new(WriterOptions::new().with_prettify_depth(2));
    writer.step_in(ContainerType::List).unwrap();
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.step_out().unwrap();
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[\n  [1],\n  [2]\n]");
}

#[test]
fn test_prettify_depth_struct_keeps_colon_space() {
    let mut writer = PrettyWriter::new(WriterOptions::new().with_prettify_depth(1));
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("a").unwrap();
    writer.write_int(1).unwrap();
    writer.write_field_name("b").unwrap();
    writer.write_int(2).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "{a: 1,b: 2}");
}

#[test]
fn test_prettify_depth_zero_is_compact_nesting() {
    let mut writer = PrettyWriter::new(WriterOptions::new().with_prettify_depth(0));
    writer.step_in(ContainerType::List).unwrap();
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.step_out().unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[[1]]");
}

#[test]
fn test_indent_width() {
    let mut writer = PrettyWriter::new(WriterOptions::new().with_indent(4));
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "[\n    1\n]");
}

#[test]
fn test_annotations_prefix_values() {
    let mut writer = pretty();
    writer.annotate("deg");
    writer.write_int(30).unwrap();
    assert_eq!(finish(writer), "deg::30");

    let mut writer = pretty();
    writer.annotate("outer");
    writer.annotate("inner");
    writer.write_int(1).unwrap();
    assert_eq!(finish(writer), "outer::inner::1");
}

#[test]
fn test_annotations_prefix_containers() {
    let mut writer = pretty();
    writer.annotate("pts");
    writer.step_in(ContainerType::List).unwrap();
    writer.write_int(1).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "pts::[\n  1\n]");

    let mut writer = pretty();
    writer.annotate("empty");
    writer.step_in(ContainerType::Struct).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "empty::{}");
}

#[test]
fn test_annotation_needing_quotes() {
    let mut writer = pretty();
    writer.annotate("two words");
    writer.write_int(1).unwrap();
    assert_eq!(finish(writer), "'two words'::1");
}

#[test]
fn test_typed_nulls() {
    let mut writer = pretty();
    writer.write_null(SeonType::Null).unwrap();
    writer.write_null(SeonType::Int).unwrap();
    writer.write_null(SeonType::List).unwrap();
    assert_eq!(finish(writer), "null\nnull.int\nnull.list");
}

#[test]
fn test_null_scalar_redirects_to_null_path() {
    let mut writer = pretty();
    writer
        .write_value(&Scalar::Null(SeonType::String))
        .unwrap();
    assert_eq!(finish(writer), "null.string");
}

#[test]
fn test_null_completes_a_struct_field() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("a").unwrap();
    writer.write_null(SeonType::Null).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "{\n  a: null\n}");
}

#[test]
fn test_symbol_quoting() {
    let mut writer = pretty();
    writer.write_symbol("abc").unwrap();
    writer.write_symbol("$var").unwrap();
    writer.write_symbol("two words").unwrap();
    writer.write_symbol("true").unwrap();
    assert_eq!(finish(writer), "abc\n$var\n'two words'\n'true'");
}

#[test]
fn test_field_name_quoting() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("odd key").unwrap();
    writer.write_int(1).unwrap();
    writer.step_out().unwrap();
    assert_eq!(finish(writer), "{\n  'odd key': 1\n}");
}

#[test]
fn test_string_escapes() {
    let mut writer = pretty();
    writer.write_string("a\"b\nc\\d").unwrap();
    assert_eq!(finish(writer), "\"a\\\"b\\nc\\\\d\"");
}

#[test]
fn test_timestamp_text() {
    let moment = Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 45).unwrap();
    let mut writer = pretty();
    writer.write_timestamp(moment).unwrap();
    assert_eq!(finish(writer), "2026-08-07T12:30:45.000Z");
}

#[test]
fn test_bigint_text() {
    let mut writer = pretty();
    writer.write_bigint(BigInt::from(u64::MAX)).unwrap();
    assert_eq!(finish(writer), "18446744073709551615");
}

#[test]
fn test_float_specials() {
    let mut writer = pretty();
    writer.write_float(1.5).unwrap();
    writer.write_float(f64::NAN).unwrap();
    writer.write_float(f64::INFINITY).unwrap();
    writer.write_float(f64::NEG_INFINITY).unwrap();
    assert_eq!(finish(writer), "1.5\nnan\n+inf\n-inf");
}

#[test]
fn test_field_name_outside_struct_fails() {
    let mut writer = pretty();
    let err = writer.write_field_name("a").unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::FieldNameOutsideStruct)
    ));

    let mut writer = pretty();
    writer.step_in(ContainerType::List).unwrap();
    let err = writer.write_field_name("a").unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::FieldNameOutsideStruct)
    ));
}

#[test]
fn test_value_without_field_name_fails() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    let err = writer.write_int(1).unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::ExpectedFieldName)
    ));
}

#[test]
fn test_container_without_field_name_fails() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    let err = writer.step_in(ContainerType::List).unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::ExpectedFieldName)
    ));
}

#[test]
fn test_double_field_name_fails() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("a").unwrap();
    let err = writer.write_field_name("b").unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::ExpectedValue)
    ));
}

#[test]
fn test_step_out_with_dangling_field_fails() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("a").unwrap();
    let err = writer.step_out().unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::DanglingFieldName)
    ));
}

#[test]
fn test_step_out_at_top_level_fails() {
    let mut writer = pretty();
    let err = writer.step_out().unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::NotInContainer)
    ));
}

#[test]
fn test_container_as_struct_field_value() {
    let mut writer = pretty();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("items").unwrap();
    writer.step_in(ContainerType::List).unwrap();
    writer.step_in(ContainerType::Struct).unwrap();
    writer.write_field_name("x").unwrap();
    writer.write_int(1).unwrap();
    writer.step_out().unwrap();
    writer.step_in(ContainerType::List).unwrap();
    writer.step_out().unwrap();
    writer.step_out().unwrap();
    writer.write_field_name("flag").unwrap();
    writer.write_bool(true).unwrap();
    writer.step_out().unwrap();
    assert_eq!(
        finish(writer),
        "{\n  items: [\n    {\n      x: 1\n    },\n    []\n  ],\n  flag: true\n}"
    );
}

#[test]
fn test_depth_tracks_open_containers() {
    let mut writer = pretty();
    assert_eq!(writer.depth(), 0);
    writer.step_in(ContainerType::List).unwrap();
    writer.step_in(ContainerType::SExp).unwrap();
    assert_eq!(writer.depth(), 2);
    writer.step_out().unwrap();
    assert_eq!(writer.depth(), 1);
}
