use metadata_extractor::{MetadataExtractor, UploadLog};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new("assets/sunset.jpg");
    let upload_log = Arc::new(UploadLog::open("data.db")?);
    let mut extractor = MetadataExtractor::builder()
        .upload_log(Arc::clone(&upload_log))
        .build()?;

    let result = extractor.extract(path)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    for record in upload_log.list_all()? {
        println!("{record:?}");
    }

    Ok(())
}
