use crate::ui::table_printer::TablePrinter;

#[test]
fn table_printer_renders_expected_table_output() {
    let printer = TablePrinter::new();
    let headers = ["ID", "NAME"];
    let rows = vec![
        vec!["1".to_string(), "Alpha".to_string()],
        vec!["2".to_string(), "Beta".to_string()],
    ];
    let mut buf = Vec::new();
    printer
        .render_table("Blah", &headers, &rows, None, None, &mut buf)
        .unwrap();
    let output = String::from_utf8(buf).unwrap();
    let expected = "----------\nBLAH\n----------\nID | NAME \n----------\n1  | Alpha\n2  | Beta \n----------\n";
    assert_eq!(output, expected);
}

#[test]
fn table_printer_computes_table_width() {
    let printer = TablePrinter::new();
    let headers = ["ID", "NAME"];
    let rows = vec![vec!["1", "Bob"], vec!["10", "Alice"]];
    // widths: col1 max 2, col2 max 5, plus separator spaces (3) = 10
    assert_eq!(printer.compute_table_width(&headers, &rows), 10);
}

#[test]
fn table_printer_renders_empty_state_message() {
    let printer = TablePrinter::new();
    let headers = ["#", "COURSE"];
    let rows: Vec<Vec<String>> = Vec::new();
    let mut buf = Vec::new();
    printer
        .render_table(
            "Monday",
            &headers,
            &rows,
            Some("No courses scheduled for Monday."),
            None,
            &mut buf,
        )
        .unwrap();
    let output = String::from_utf8(buf).unwrap();
    assert!(output.contains("MONDAY"));
    assert!(output.contains("No courses scheduled for Monday."));
}

#[test]
fn table_printer_respects_left_pad() {
    let printer = TablePrinter::new().with_left_pad(4);
    let headers = ["A"];
    let rows = vec![vec!["x"]];
    let mut buf = Vec::new();
    printer
        .render_table("T", &headers, &rows, None, None, &mut buf)
        .unwrap();
    let output = String::from_utf8(buf).unwrap();
    for line in output.lines() {
        assert!(line.starts_with("    "), "line not indented: {line:?}");
    }
}
