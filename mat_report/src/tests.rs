use matcards::prelude::*;

use crate::prelude::*;

/// Makes a record with a density and nothing else.
fn rec(format: CardFormat, name: &str) -> MaterialRecord {
  let mut r = MaterialRecord::new(format, name.to_string());
  r.properties.insert(Property::Density, "2.7E-09".to_string());
  r.source_file = Some("FMAT.TXT".to_string());
  return r;
}

/// Makes n MAT_018 records named "Alloy i".
fn many(n: usize) -> Vec<MaterialRecord> {
  return (0..n)
    .map(|i| rec(CardFormat::Mat018, &format!("Alloy {}", i)))
    .collect();
}

/// Renders the Markdown report into a string.
fn render_md(records: &[MaterialRecord], options: &ReportOptions) -> String {
  let mut out: Vec<u8> = Vec::new();
  write_markdown(&mut out, records, options).unwrap();
  return String::from_utf8(out).unwrap();
}

/// Counts the data rows in the Markdown sample table.
fn md_data_rows(md: &str) -> usize {
  return md.lines()
    .filter(|l| l.starts_with("| ") && !l.starts_with("| Material Name"))
    .count();
}

#[test]
fn test_csv_shape() {
  let mut records = many(3);
  records[1].properties.insert(Property::Cte, "2.36E-05".to_string());
  let mut out: Vec<u8> = Vec::new();
  write_csv(&mut out, &records, &ReportOptions::default()).unwrap();
  let mut rdr = csv::Reader::from_reader(out.as_slice());
  let headers = rdr.headers().unwrap().clone();
  assert_eq!(headers.len(), MAT_CSV_COLS);
  assert_eq!(&headers[0], "Material Name");
  assert_eq!(&headers[1], "Density (tonne/mm³)");
  assert_eq!(&headers[10], "Yield Offset (%)");
  let rows = rdr.records().map(|r| r.unwrap()).collect::<Vec<_>>();
  assert_eq!(rows.len(), 3);
  for row in rows.iter() {
    assert_eq!(row.len(), MAT_CSV_COLS);
    assert_eq!(&row[1], "2.7E-09");
    assert_eq!(&row[2], "");
  }
  assert_eq!(&rows[1][9], "2.36E-05");
  assert_eq!(&rows[0][9], "");
}

#[test]
fn test_csv_quotes_and_delimiter() {
  let records = vec![rec(CardFormat::Mat024, "STEEL, 4340; annealed")];
  let options = ReportOptions { delim: ';', ..Default::default() };
  let mut out: Vec<u8> = Vec::new();
  write_csv(&mut out, &records, &options).unwrap();
  let text = String::from_utf8(out).unwrap();
  let row = text.lines().nth(1).unwrap();
  assert!(row.starts_with("\"STEEL, 4340; annealed\";2.7E-09;"));
}

#[test]
fn test_csv_bad_delimiter() {
  let options = ReportOptions { delim: 'ŭ', ..Default::default() };
  let err = write_csv(Vec::new(), &many(1), &options).unwrap_err();
  assert!(matches!(err, ReportError::BadDelimiter('ŭ')));
}

#[test]
fn test_csv_empty() {
  let mut out: Vec<u8> = Vec::new();
  write_csv(&mut out, &[], &ReportOptions::default()).unwrap();
  assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn test_markdown_sample_limit() {
  let options = ReportOptions::default();
  let md = render_md(&many(25), &options);
  assert_eq!(md_data_rows(&md), 20);
  assert!(md.contains("**Total Materials Found: 25**"));
  assert!(md.contains("*... and 5 more materials (see CSV file for complete list)*"));
  let md = render_md(&many(20), &options);
  assert_eq!(md_data_rows(&md), 20);
  assert!(!md.contains("more materials (see CSV"));
  let md = render_md(&many(3), &options);
  assert_eq!(md_data_rows(&md), 3);
  assert!(!md.contains("more materials (see CSV"));
  let md = render_md(&[], &options);
  assert_eq!(md_data_rows(&md), 0);
}

#[test]
fn test_markdown_cells() {
  let long = "ALUMINUM 2024-T3 CLAD SHEET, THIN GAUGE";
  let records = vec![rec(CardFormat::Mat018, long), rec(CardFormat::Mat018, "A|B")];
  let md = render_md(&records, &ReportOptions::default());
  let rows = md.lines()
    .filter(|l| l.starts_with("| ") && !l.starts_with("| Material Name"))
    .collect::<Vec<_>>();
  assert!(rows[0].starts_with("| ALUMINUM 2024-T3 CLAD SHEET, T... | 2.7E-09 | N/A |"));
  assert!(rows[1].starts_with("| A\\|B | 2.7E-09 |"));
  assert_eq!(rows[0].matches("N/A").count(), 9);
}

#[test]
fn test_markdown_custom_options() {
  let options = ReportOptions {
    sample_size: 2,
    name_width: 5,
    md_blank: "-".to_string(),
    ..Default::default()
  };
  let md = render_md(&many(4), &options);
  assert_eq!(md_data_rows(&md), 2);
  assert!(md.contains("## Sample of First 2 Materials"));
  assert!(md.contains("| Alloy... | 2.7E-09 | - |"));
  assert!(md.contains("*... and 2 more materials"));
}

#[test]
fn test_markdown_family_summary() {
  let records = vec![
    rec(CardFormat::Mat018, "Aluminum 6061"),
    rec(CardFormat::Mat018, "STEEL 1020"),
    rec(CardFormat::Mat024, "Copper C101"),
    rec(CardFormat::Mat024, "Cartridge Brass"),
    rec(CardFormat::Mat098, "Titanium Grade 5"),
    rec(CardFormat::Mat098, "Inconel 718"),
  ];
  let md = render_md(&records, &ReportOptions::default());
  assert!(md.contains("- **Aluminum alloys**: 1 materials"));
  assert!(md.contains("- **Steel alloys**: 1 materials"));
  assert!(md.contains("- **Copper/Brass alloys**: 2 materials"));
  assert!(md.contains("- **Titanium alloys**: 1 materials"));
  assert!(md.contains("- **Other materials**: 1 materials"));
  assert!(md.contains("- **Total**: 6 materials"));
}

#[test]
fn test_classify_overlap() {
  assert_eq!(MaterialFamily::classify("aluminum-clad steel"), MaterialFamily::Aluminum);
  assert_eq!(MaterialFamily::classify("brass"), MaterialFamily::CopperBrass);
  assert_eq!(MaterialFamily::classify("Stainless"), MaterialFamily::Other);
  let records = vec![
    rec(CardFormat::Mat018, "Aluminum bronze with steel inserts"),
    rec(CardFormat::Mat018, "Titanium/copper laminate"),
  ];
  let counts = FamilyCounts::tally(&records);
  // overlapping names are counted once, so nothing goes negative
  assert_eq!(counts.total(), records.len());
  assert_eq!(counts.get(MaterialFamily::Aluminum), 1);
  assert_eq!(counts.get(MaterialFamily::CopperBrass), 1);
  assert_eq!(counts.get(MaterialFamily::Steel), 0);
  assert_eq!(counts.get(MaterialFamily::Other), 0);
}

#[test]
fn test_summary_groups() {
  let mut records = many(5);
  records.insert(1, rec(CardFormat::Mat098, "Titanium"));
  let mut out: Vec<u8> = Vec::new();
  write_summary(&mut out, &records).unwrap();
  let text = String::from_utf8(out).unwrap();
  assert!(text.contains("Total Materials Found: 6"));
  let pos_018 = text.find("MAT_018 (Power Law Plasticity): 5 materials").unwrap();
  let pos_098 = text.find("MAT_098 (Simplified Johnson Cook): 1 materials").unwrap();
  assert!(pos_018 < pos_098);
  assert!(text.contains("  ... and 2 more materials"));
  assert!(text.contains("     Density: 2.7E-09, Young's: N/A"));
  assert!(text.contains("     Source: FMAT.TXT"));
  let groups = group_by_format(&records);
  assert_eq!(groups.len(), 2);
  assert_eq!(groups[0].1.len(), 5);
}

#[test]
fn test_summary_empty() {
  let mut out: Vec<u8> = Vec::new();
  write_summary(&mut out, &[]).unwrap();
  assert_eq!(String::from_utf8(out).unwrap(), "No materials found.\n");
}
