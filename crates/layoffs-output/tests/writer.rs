#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::fs;

use chrono::NaiveDate;
use layoffs_model::{CleaningReport, LayoffRecord, NullAudit, RejectedRecord, StepReport};
use layoffs_output::{write_cleaned_csv, write_report_json};

fn records() -> Vec<LayoffRecord> {
    vec![
        LayoffRecord {
            company: "Acme".to_string(),
            location: Some("Salt Lake City, UT".to_string()),
            industry: Some("Crypto".to_string()),
            total_laid_off: Some(10),
            percentage_laid_off: Some(0.25),
            event_date: NaiveDate::from_ymd_opt(2022, 1, 5),
            stage: Some("Seed".to_string()),
            country: Some("USA".to_string()),
            funds_raised_millions: Some(5.0),
        },
        LayoffRecord {
            company: "Bally's".to_string(),
            location: None,
            industry: None,
            total_laid_off: None,
            percentage_laid_off: Some(0.1),
            event_date: None,
            stage: None,
            country: Some("United States".to_string()),
            funds_raised_millions: Some(946.0),
        },
    ]
}

fn report() -> CleaningReport {
    let mut unrecognized = BTreeMap::new();
    unrecognized.insert("Fin-Tech".to_string(), 1);
    CleaningReport {
        input_rows: 3,
        output_rows: 2,
        steps: vec![StepReport {
            name: "deduplicate".to_string(),
            rows_before: 3,
            rows_after: 2,
            values_changed: 0,
        }],
        rejected: vec![RejectedRecord {
            line: 4,
            company: "Ghost".to_string(),
            value: "Jan 5".to_string(),
            reason: "unparseable date".to_string(),
        }],
        unrecognized_industries: unrecognized,
        retained_nulls: NullAudit {
            total_laid_off: 1,
            percentage_laid_off: 2,
            funds_raised_millions: 0,
            both_measures: 0,
        },
    }
}

#[test]
fn writes_cleaned_csv_with_empty_nulls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layoffs_cleaned.csv");
    write_cleaned_csv(&path, &records()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "company,location,industry,total_laid_off,percentage_laid_off,date,stage,country,funds_raised_millions",
            "Acme,\"Salt Lake City, UT\",Crypto,10,0.25,2022-01-05,Seed,USA,5",
            "Bally's,,,,0.1,,,United States,946",
        ]
    );
    assert!(!dir.path().join("layoffs_cleaned.csv.tmp").exists());
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.csv");
    write_cleaned_csv(&path, &[]).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("company,location,industry"));
}

#[test]
fn writes_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = report();
    write_report_json(&path, &report).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, serde_json::to_value(&report).unwrap());

    insta::assert_json_snapshot!(report, @r#"
    {
      "input_rows": 3,
      "output_rows": 2,
      "steps": [
        {
          "name": "deduplicate",
          "rows_before": 3,
          "rows_after": 2,
          "values_changed": 0
        }
      ],
      "rejected": [
        {
          "line": 4,
          "company": "Ghost",
          "value": "Jan 5",
          "reason": "unparseable date"
        }
      ],
      "unrecognized_industries": {
        "Fin-Tech": 1
      },
      "retained_nulls": {
        "total_laid_off": 1,
        "percentage_laid_off": 2,
        "funds_raised_millions": 0,
        "both_measures": 0
      }
    }
    "#);
}
