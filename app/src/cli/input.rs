use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use fern_lang_syntax::Exp;

use crate::result::Error;

/// Read a syntax tree from a JSON file, or from stdin if the path is `-`
pub fn read_exp(path: &Path) -> Result<Exp, Error> {
    let (name, src) = if path.as_os_str() == "-" {
        let mut src = String::new();
        io::stdin()
            .read_to_string(&mut src)
            .map_err(|source| Error::Read { path: "<stdin>".to_owned(), source })?;
        ("<stdin>".to_owned(), src)
    } else {
        let name = path.display().to_string();
        let src = fs::read_to_string(path)
            .map_err(|source| Error::Read { path: name.clone(), source })?;
        (name, src)
    };
    debug!("Decoding {} bytes from {name}", src.len());
    serde_json::from_str(&src).map_err(|err| Error::decode(&name, src, err))
}
