//! Integration tests for file-level cleaning.

use std::fs;
use std::path::{Path, PathBuf};

use layoffs_cli::pipeline::{clean_file, default_output_path, profile_file};
use layoffs_cli::types::CleanRequest;
use layoffs_model::{CleaningOptions, InvalidDatePolicy};
use tempfile::TempDir;

const RAW: &str = "\
company,location,industry,total_laid_off,percentage_laid_off,date,stage,country,funds_raised_millions
Acme,NY,CryptoCurrency,NULL,NULL,1/5/2022,Seed,USA.,5
Acme,NY,CryptoCurrency,NULL,NULL,1/5/2022,Seed,USA.,5
Airbnb,SF Bay Area,,30,NULL,3/3/2023,Post-IPO,United States,6400
Airbnb,SF Bay Area,Travel,1900,0.25,5/5/2020,Private Equity,United States,6400
Coinbase,SF Bay Area,Crypto Currency,1100,0.18,6/14/2022,Post-IPO,United States.,549
Fintechly,London,Fin-Tech,50,NULL,2/1/2023,Series B,United Kingdom,80
";

const SYNONYMS: &str = "\
canonical,variants
Crypto,Crypto Currency;CryptoCurrency
Travel,
";

fn setup(raw: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("layoffs.csv");
    let synonyms = dir.path().join("synonyms.csv");
    fs::write(&input, raw).unwrap();
    fs::write(&synonyms, SYNONYMS).unwrap();
    (dir, input, synonyms)
}

fn request(input: &Path, synonyms: &Path) -> CleanRequest {
    let mut request = CleanRequest::new(input);
    request.synonyms = Some(synonyms.to_path_buf());
    request
}

#[test]
fn cleans_file_and_writes_default_output() {
    let (_dir, input, synonyms) = setup(RAW);
    let run = clean_file(&request(&input, &synonyms)).unwrap();

    let output = default_output_path(&input);
    assert_eq!(run.output.as_deref(), Some(output.as_path()));
    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "company,location,industry,total_laid_off,percentage_laid_off,date,stage,country,funds_raised_millions",
            "Airbnb,SF Bay Area,Travel,30,,2023-03-03,Post-IPO,United States,6400",
            "Airbnb,SF Bay Area,Travel,1900,0.25,2020-05-05,Private Equity,United States,6400",
            "Coinbase,SF Bay Area,Crypto,1100,0.18,2022-06-14,Post-IPO,United States,549",
            "Fintechly,London,Fin-Tech,50,,2023-02-01,Series B,United Kingdom,80",
        ]
    );

    assert_eq!(run.report.input_rows, 6);
    assert_eq!(run.report.output_rows, 4);
    assert_eq!(run.report.unrecognized_industries.get("Fin-Tech"), Some(&1));
    assert_eq!(fs::read_to_string(&input).unwrap(), RAW);
}

#[test]
fn writes_report_when_asked() {
    let (dir, input, synonyms) = setup(RAW);
    let mut request = request(&input, &synonyms);
    let report_path = dir.path().join("report.json");
    request.report = Some(report_path.clone());
    clean_file(&request).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["input_rows"], 6);
    assert_eq!(report["output_rows"], 4);
    assert_eq!(report["steps"][0]["name"], "snapshot");
}

#[test]
fn dry_run_writes_nothing() {
    let (_dir, input, synonyms) = setup(RAW);
    let mut request = request(&input, &synonyms);
    request.dry_run = true;
    let run = clean_file(&request).unwrap();
    assert!(run.output.is_none());
    assert_eq!(run.report.output_rows, 4);
    assert!(!default_output_path(&input).exists());
}

#[test]
fn failed_run_leaves_no_output() {
    let raw = format!("{RAW}Broken,NY,Retail,5,NULL,someday,Seed,USA,1\n");
    let (_dir, input, synonyms) = setup(&raw);
    let err = clean_file(&request(&input, &synonyms)).unwrap_err();
    assert!(format!("{err:#}").contains("date 'someday'"));
    assert!(!default_output_path(&input).exists());
}

#[test]
fn reject_policy_keeps_going() {
    let raw = format!("{RAW}Broken,NY,Retail,5,NULL,someday,Seed,USA,1\n");
    let (_dir, input, synonyms) = setup(&raw);
    let mut request = request(&input, &synonyms);
    request.options = CleaningOptions::new().with_invalid_dates(InvalidDatePolicy::Reject);
    let run = clean_file(&request).unwrap();
    assert_eq!(run.report.rejected.len(), 1);
    assert_eq!(run.report.rejected[0].line, 8);
    assert_eq!(run.report.output_rows, 4);
}

#[test]
fn refuses_to_overwrite_the_source() {
    let (_dir, input, synonyms) = setup(RAW);
    let mut request = request(&input, &synonyms);
    request.output = Some(input.clone());
    let err = clean_file(&request).unwrap_err();
    assert!(err.to_string().contains("would overwrite the source table"));
    assert_eq!(fs::read_to_string(&input).unwrap(), RAW);
}

#[test]
fn refuses_report_over_source() {
    let (_dir, input, synonyms) = setup(RAW);
    let mut request = request(&input, &synonyms);
    request.report = Some(input.clone());
    let err = clean_file(&request).unwrap_err();
    assert!(err.to_string().contains("would overwrite the source table"));
    assert_eq!(fs::read_to_string(&input).unwrap(), RAW);
    assert!(!default_output_path(&input).exists());
}

#[test]
fn refuses_report_over_cleaned_output() {
    let (dir, input, synonyms) = setup(RAW);
    let output = dir.path().join("cleaned.csv");
    let mut request = request(&input, &synonyms);
    request.output = Some(output.clone());
    request.report = Some(dir.path().join(".").join("cleaned.csv"));
    let err = clean_file(&request).unwrap_err();
    assert!(err.to_string().contains("would overwrite the cleaned output"));
    assert!(!output.exists());
}

#[test]
fn refuses_report_over_synonyms() {
    let (_dir, input, synonyms) = setup(RAW);
    let mut request = request(&input, &synonyms);
    request.report = Some(synonyms.clone());
    let err = clean_file(&request).unwrap_err();
    assert!(err.to_string().contains("would overwrite the synonym table"));
    assert_eq!(fs::read_to_string(&synonyms).unwrap(), SYNONYMS);
}

#[test]
fn cleaning_the_written_output_reproduces_it() {
    let raw = format!(
        "{RAW}\
\"Widget \"\"Labs\"\" Inc\",\"Salt Lake City, UT\",Retail,12,0.10,7/4/2022,Series A,United States..,1e3
"
    );
    let (dir, input, synonyms) = setup(&raw);
    let first = dir.path().join("first.csv");
    let mut first_pass = request(&input, &synonyms);
    first_pass.output = Some(first.clone());
    let run = clean_file(&first_pass).unwrap();
    assert_eq!(run.report.output_rows, 5);

    let second = dir.path().join("second.csv");
    let mut second_pass = request(&first, &synonyms);
    second_pass.output = Some(second.clone());
    let rerun = clean_file(&second_pass).unwrap();

    let first_bytes = fs::read(&first).unwrap();
    assert_eq!(fs::read(&second).unwrap(), first_bytes);
    assert_eq!(rerun.report.output_rows, 5);
    let contents = String::from_utf8(first_bytes).unwrap();
    assert!(contents.contains(
        "\"Widget \"\"Labs\"\" Inc\",\"Salt Lake City, UT\",Retail,12,0.1,2022-07-04,Series A,United States,1000"
    ));
}

#[test]
fn schema_mismatch_is_reported() {
    let (_dir, input, synonyms) = setup("company,industry\nAcme,Retail\n");
    let err = clean_file(&request(&input, &synonyms)).unwrap_err();
    assert!(format!("{err:#}").contains("missing"));
}

#[test]
fn profiles_industries() {
    let (_dir, input, synonyms) = setup(RAW);
    let profile = profile_file(&input, Some(&synonyms)).unwrap();
    insta::assert_json_snapshot!(profile, @r#"
    [
      {
        "value": "CryptoCurrency",
        "count": 2,
        "class": "variant",
        "canonical": "Crypto"
      },
      {
        "value": null,
        "count": 1,
        "class": null,
        "canonical": null
      },
      {
        "value": "Crypto Currency",
        "count": 1,
        "class": "variant",
        "canonical": "Crypto"
      },
      {
        "value": "Fin-Tech",
        "count": 1,
        "class": "unrecognized",
        "canonical": null
      },
      {
        "value": "Travel",
        "count": 1,
        "class": "canonical",
        "canonical": "Travel"
      }
    ]
    "#);
}
