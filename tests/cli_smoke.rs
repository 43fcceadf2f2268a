use std::path::PathBuf;

#[test]
fn cli_renders_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("in.png");
    let out_path = dir.join("out.png");
    let _ = std::fs::remove_file(&out_path);

    let img = image::RgbaImage::from_fn(24, 16, |x, y| {
        let v = ((x + y) * 6) as u8;
        image::Rgba([v, v, v, 255])
    });
    img.save(&in_path).unwrap();

    let exe = std::env::var_os("CARGO_BIN_EXE_spiraline")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "spiraline.exe"
            } else {
                "spiraline"
            });
            p
        });

    let in_arg = in_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(exe)
        .args([
            "--in",
            in_arg.as_str(),
            "--out",
            out_arg.as_str(),
            "--resolution",
            "128",
            "--turns",
            "40",
        ])
        .status()
        .unwrap();

    assert!(status.success());
    let decoded = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (128, 128));
}
