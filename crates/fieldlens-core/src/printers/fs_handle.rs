use anyhow::{Context, Result};
use fieldlens_types::Value;

use crate::printer::{Rendered, ValuePrinter};

/// Printer for the kernel file-handle record (`struct fs_handle_base`).
///
/// Emits exactly seven children, in this order:
///
/// - `pi`         owning-process id (`pi->pid`, the id itself, not the
///   process reference)
/// - `fs`         owning filesystem value, opaque
/// - `fs_type`    filesystem type name (`fs->fs_type_name`), decoded to text
/// - `fd_flags`   descriptor flags, unconverted
/// - `fl_flags`   file-status flags, unconverted
/// - `spec_flags` special flags, unconverted
/// - `pos`        read/write cursor position, unconverted
///
/// A missing field or an undecodable type name fails the whole request; no
/// pair is silently dropped.
pub struct FsHandlePrinter;

impl FsHandlePrinter {
    pub const NAME: &'static str = "fs_handle_base";
    pub const PATTERN: &'static str = "^fs_handle_base$";

    const TYPE_LABEL: &'static str = "fs_handle_base";
}

impl ValuePrinter for FsHandlePrinter {
    fn format(&self, value: &Value) -> Result<Rendered> {
        let pid = value
            .field("pi")?
            .field("pid")?
            .as_int()
            .context("reading pi->pid")?;
        let fs = value.field("fs")?;
        let fs_type = fs
            .field("fs_type_name")?
            .as_text()
            .context("reading fs->fs_type_name")?;

        let children = vec![
            ("pi".to_string(), Value::int(pid)),
            ("fs".to_string(), fs.clone()),
            ("fs_type".to_string(), Value::text(fs_type)),
            ("fd_flags".to_string(), value.field("fd_flags")?.clone()),
            ("fl_flags".to_string(), value.field("fl_flags")?.clone()),
            ("spec_flags".to_string(), value.field("spec_flags")?.clone()),
            ("pos".to_string(), value.field("pos")?.clone()),
        ];

        Ok(Rendered {
            type_label: Self::TYPE_LABEL.to_string(),
            children,
        })
    }
}
