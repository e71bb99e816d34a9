extern crate csv;

use std::error::Error;
use std::fs::{self, File};
use std::path::Path;
use super::dataset::{Table, TextTable};

/// How to read a delimited file into a `Table` or `TextTable`.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub has_headers: bool,
    /// Column names when the file has no header row.
    pub names: Vec<String>,
    pub label: String,
    /// Feature columns for a `Table`, or the single text column for a `TextTable`.
    pub features: Vec<String>,
}

/// Fetches `url` into `path` unless `path` already exists. An existing file is
/// trusted as is.
pub fn download_if_not_present(url: &str, path: &str) -> Result<bool, Box<dyn Error>> {

    if Path::new(path).exists() {
        tracing::debug!("{} already present, skipping download", path);
        return Ok(false)
    }

    tracing::info!("downloading {} to {}", url, path);
    let data = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &data)?;
    tracing::info!("saved {} bytes", data.len());

    Ok(true)
}

fn reader(filename: &str, options: &ReadOptions) -> Result<(csv::Reader<File>, Vec<String>), Box<dyn Error>> {

    let file = File::open(filename)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .from_reader(file);

    let header: Vec<String> = if options.has_headers {
        rdr.headers()?.iter().map(|h| h.trim().to_string()).collect()
    } else {
        options.names.clone()
    };

    if header.is_empty() {
        return Err(format!("no column names for '{}'", filename).into())
    }

    Ok((rdr, header))
}

fn position(header: &[String], name: &str, filename: &str) -> Result<usize, Box<dyn Error>> {
    match header.iter().position(|h| h == name) {
        Some(i) => Ok(i),
        None => Err(format!("column '{}' not found in '{}'", name, filename).into()),
    }
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

pub fn read_table(filename: &str, options: &ReadOptions) -> Result<Table, Box<dyn Error>> {

    let (mut rdr, header) = reader(filename, options)?;

    let label_idx = position(&header, &options.label, filename)?;
    let mut feature_idx = Vec::with_capacity(options.features.len());
    for name in options.features.iter() {
        feature_idx.push(position(&header, name, filename)?);
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); feature_idx.len()];
    let mut labels: Vec<String> = Vec::new();

    for (line, entry) in rdr.records().enumerate() {

        let record = entry?;
        if is_blank(&record) {
            continue;
        }

        for (col, &i) in columns.iter_mut().zip(feature_idx.iter()) {
            let cell = record.get(i).ok_or_else(|| format!("record {} is missing column {}", line, i))?;
            let val = cell.trim().parse::<f64>()
                .map_err(|e| format!("record {}: cannot parse '{}' as a number: {}", line, cell, e))?;
            col.push(val);
        }

        let label = record.get(label_idx).ok_or_else(|| format!("record {} is missing the label", line))?;
        labels.push(label.trim().to_string());
    }

    tracing::debug!("read {} rows from {}", labels.len(), filename);

    Table::new(options.features.clone(), columns, labels)
}

pub fn read_text_table(filename: &str, options: &ReadOptions) -> Result<TextTable, Box<dyn Error>> {

    let (mut rdr, header) = reader(filename, options)?;

    let text_name = match options.features.first() {
        Some(name) => name,
        None => return Err("a text column must be named".into()),
    };
    let text_idx = position(&header, text_name, filename)?;
    let label_idx = position(&header, &options.label, filename)?;

    let mut texts: Vec<String> = Vec::new();
    let mut labels: Vec<String> = Vec::new();

    for (line, entry) in rdr.records().enumerate() {

        let record = entry?;
        if is_blank(&record) {
            continue;
        }
        let text = record.get(text_idx).ok_or_else(|| format!("record {} is missing the text", line))?;
        let label = record.get(label_idx).ok_or_else(|| format!("record {} is missing the label", line))?;
        texts.push(text.to_string());
        labels.push(label.trim().to_string());
    }

    tracing::debug!("read {} texts from {}", texts.len(), filename);

    TextTable::new(texts, labels)
}

/// Up to `limit` raw records (plus the header, if any) from a delimited file.
pub fn read_records(filename: &str, delimiter: u8, has_headers: bool, limit: usize) -> Result<(Option<Vec<String>>, Vec<Vec<String>>), Box<dyn Error>> {

    let file = File::open(filename)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(file);

    let header = if has_headers {
        Some(rdr.headers()?.iter().map(String::from).collect())
    } else {
        None
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for entry in rdr.records().take(limit) {
        let row: Vec<String> = entry?.deserialize(None)?;
        rows.push(row);
    }

    Ok((header, rows))
}

pub fn write_delimited(filename: &str, header: Option<&[String]>, rows: &[Vec<String>], delimiter: u8) -> Result<(), Box<dyn Error>> {

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(filename)?;

    if let Some(header) = header {
        wtr.write_record(header)?;
    }
    for row in rows.iter() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Write;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn iris_options() -> ReadOptions {
        ReadOptions {
            delimiter: b',',
            has_headers: false,
            names: strings(&["sepal_len", "sepal_wid", "petal_len", "petal_wid", "species"]),
            label: "species".to_string(),
            features: strings(&["sepal_len", "petal_wid"]),
        }
    }

    #[test]
    fn read_headerless_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "5.1,3.5,1.4,0.2,Iris-setosa\n7.0,3.2,4.7,1.4,Iris-versicolor\n\n").unwrap();

        let table = read_table(file.path().to_str().unwrap(), &iris_options()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.column("sepal_len").unwrap(), &[5.1, 7.0]);
        assert_eq!(table.column("petal_wid").unwrap(), &[0.2, 1.4]);
        assert_eq!(table.labels(), &strings(&["Iris-setosa", "Iris-versicolor"])[..]);
    }

    #[test]
    fn read_table_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "5.1,oops,1.4,0.2,Iris-setosa\n").unwrap();
        let path = file.path().to_str().unwrap();

        let mut options = iris_options();
        options.features = strings(&["sepal_wid"]);
        assert!(read_table(path, &options).is_err());

        options.features = strings(&["not_a_column"]);
        assert!(read_table(path, &options).is_err());

        assert!(read_table("not/a/real/file.csv", &iris_options()).is_err());
    }

    #[test]
    fn read_tsv_texts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ham\tOk lar... Joking wif u oni...\nspam\tFree entry, win now\n").unwrap();

        let options = ReadOptions {
            delimiter: b'\t',
            has_headers: false,
            names: strings(&["label", "text"]),
            label: "label".to_string(),
            features: strings(&["text"]),
        };
        let texts = read_text_table(file.path().to_str().unwrap(), &options).unwrap();
        assert_eq!(texts.labels(), &strings(&["ham", "spam"])[..]);
        assert_eq!(texts.texts()[1], "Free entry, win now");
    }

    #[test]
    fn csv_to_tsv_keeps_first_records() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.csv");
        let dst = dir.path().join("out.tsv");
        fs::write(&src, "a,b\n1,2\n3,4\n5,6\n").unwrap();

        let (header, rows) = read_records(src.to_str().unwrap(), b',', true, 2).unwrap();
        write_delimited(dst.to_str().unwrap(), header.as_deref(), &rows, b'\t').unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "a\tb\n1\t2\n3\t4\n");
    }

    #[test]
    fn existing_file_not_downloaded() {
        let file = tempfile::NamedTempFile::new().unwrap();
        /* unreachable url: nothing is fetched when the file exists */
        let fetched = download_if_not_present("http://127.0.0.1:9/none", file.path().to_str().unwrap()).unwrap();
        assert!(!fetched);
    }
}
