use std::path::PathBuf;

use tinystack_asm::assemble;

use super::CommandError;

pub struct AssembleArgs {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub color: bool,
}

pub fn run(args: AssembleArgs) -> Result<(), CommandError> {
    let source =
        std::fs::read_to_string(&args.source_path).map_err(|source| CommandError::Read {
            path: args.source_path.clone(),
            source,
        })?;

    let assembly = assemble(&source).map_err(|err| {
        let path = args.source_path.display().to_string();
        let rendered = err
            .printer(&source)
            .path(&path)
            .colored(args.color)
            .render();
        CommandError::Assemble(rendered)
    })?;

    tracing::debug!(
        bytes = assembly.bytes.len(),
        labels = assembly.labels.len(),
        "assembled {}",
        args.source_path.display()
    );

    std::fs::write(&args.output_path, &assembly.bytes).map_err(|source| CommandError::Write {
        path: args.output_path.clone(),
        source,
    })
}
