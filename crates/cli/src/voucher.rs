use std::fs;
use std::path::Path;
use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::info;

use crate::cli::PathExt;
use crate::cli::VoucherArgs;
use crate::error::CliError;

const FILE_NAME: &str = "eco_voucher.png";

pub(crate) fn voucher(args: VoucherArgs) -> Result<(), CliError> {
    let output_path = args.output.output_path.or_current_dir()?;

    let data_url = match (args.data_url, args.file) {
        (Some(data_url), _) => data_url,
        (None, Some(file)) => fs::read_to_string(file)?,
        (None, None) => return Err(CliError::Voucher("no data URL given".to_string())),
    };

    let png = decode_data_url(&data_url)?;
    let path = save_voucher(&png, &output_path)?;

    info!(
        "ecodash saved the {size} byte voucher to `{path}`",
        size = png.len(),
        path = path.display()
    );

    Ok(())
}

/// Decodes the base64 payload that follows the first comma of a data URL.
pub(crate) fn decode_data_url(data_url: &str) -> Result<Vec<u8>, CliError> {
    let Some((_, payload)) = data_url.trim().split_once(',') else {
        return Err(CliError::Voucher(
            "the data URL has no `,` before its payload".to_string(),
        ));
    };

    STANDARD
        .decode(payload)
        .map_err(|e| CliError::Voucher(format!("invalid base64 payload: {e}")))
}

fn save_voucher(png: &[u8], dir: &Path) -> Result<PathBuf, CliError> {
    let path = dir.join(FILE_NAME);
    fs::write(&path, png)?;
    Ok(path)
}
