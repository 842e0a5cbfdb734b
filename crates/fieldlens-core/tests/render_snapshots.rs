use fieldlens_core::{PrinterRegistry, RenderOptions, install_default_printers, render_symbol, render_value};
use fieldlens_types::{Symbol, Value};

fn registry() -> PrinterRegistry {
    let mut registry = PrinterRegistry::new();
    install_default_printers(&mut registry).unwrap();
    registry
}

fn mnt_fs() -> Value {
    Value::record(
        "mnt_fs",
        vec![
            ("fs_type_name", Value::bytes(*b"fat32\0")),
            ("ref_count", Value::int(3)),
        ],
    )
}

fn handle() -> Value {
    let process = Value::record("process", vec![("pid", Value::int(42))]);
    Value::record(
        "fs_handle_base",
        vec![
            ("pi", Value::pointer(0x8000_1000, Some(process))),
            ("fs", Value::pointer(0x8000_2000, Some(mnt_fs()))),
            ("fd_flags", Value::int(0x1)),
            ("fl_flags", Value::int(0x2)),
            ("spec_flags", Value::int(0x0)),
            ("pos", Value::int(1024)),
        ],
    )
}

#[test]
fn test_render_matched_handle() {
    let symbol = Symbol {
        name: "curr_handle".to_string(),
        value: handle(),
    };

    let out = render_symbol(&registry(), &symbol, RenderOptions::default()).unwrap();
    insta::assert_snapshot!(out, @r#"
    curr_handle = fs_handle_base {
      pi = 42
      fs = (struct mnt_fs *) 0x80002000
      fs_type = "fat32"
      fd_flags = 0x1
      fl_flags = 0x2
      spec_flags = 0x0
      pos = 1024
    }
    "#);
}

#[test]
fn test_render_unmatched_struct_generically() {
    let out = render_value(&registry(), &mnt_fs(), RenderOptions::default()).unwrap();
    insta::assert_snapshot!(out, @r#"
    struct mnt_fs {
      fs_type_name = "fat32"
      ref_count = 3
    }
    "#);
}

#[test]
fn test_render_nested_struct_by_value() {
    let value = Value::record(
        "fs_handle_base",
        vec![
            ("pi", Value::pointer(0x8000_1000, Some(Value::record("process", vec![("pid", Value::int(1))])))),
            ("fs", mnt_fs()),
            ("fd_flags", Value::int(0)),
            ("fl_flags", Value::int(0)),
            ("spec_flags", Value::int(0)),
            ("pos", Value::int(0)),
        ],
    );

    let out = render_value(&registry(), &value, RenderOptions::default()).unwrap();
    insta::assert_snapshot!(out, @r#"
    fs_handle_base {
      pi = 1
      fs = struct mnt_fs {
        fs_type_name = "fat32"
        ref_count = 3
      }
      fs_type = "fat32"
      fd_flags = 0x0
      fl_flags = 0x0
      spec_flags = 0x0
      pos = 0
    }
    "#);
}

#[test]
fn test_render_fails_on_incomplete_handle() {
    // Matches the printer pattern but lacks the expected layout.
    let value = Value::record("fs_handle_base", vec![("pos", Value::int(0))]);
    assert!(render_value(&registry(), &value, RenderOptions::default()).is_err());
}
