// slotboard CLI
//
// Stands in for the parameter-collecting host: takes `name=value` overrides
// on the command line, runs both panel generators, and writes the results
// into the `stl` folder as binary STL plus an SVG face drawing each.

use slotboard::float_types::Real;
use slotboard::io::svg::face_to_svg;
use slotboard::panel::{PanelStyle, bead, lettered};
use slotboard::params::{BeadPanelParams, LetteredPanelParams, ParamDef, ParamValues};
use std::{env, fs, path::Path, process};

const OUT_DIR: &str = "stl";

fn main() {
    if let Err(message) = run() {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--list-params") {
        list_params();
        return Ok(());
    }

    let mut values = ParamValues::new();
    for arg in &args {
        let Some((name, raw)) = arg.split_once('=') else {
            return Err(format!("expected name=value, got {arg:?}"));
        };
        let value: Real = raw
            .parse()
            .map_err(|_| format!("parameter {name:?} expects a number, got {raw:?}"))?;
        values.set(name, value);
    }
    for name in values.names() {
        let known = LetteredPanelParams::definitions()
            .iter()
            .chain(BeadPanelParams::definitions())
            .any(|def| def.name == name);
        if !known {
            return Err(format!("unknown parameter {name:?} (try --list-params)"));
        }
    }

    fs::create_dir_all(OUT_DIR).map_err(|e| format!("cannot create {OUT_DIR}: {e}"))?;
    let style = PanelStyle::default();

    let lettered_params = LetteredPanelParams::from_values(
        &values.filtered(LetteredPanelParams::definitions()),
    )
    .map_err(|e| e.to_string())?;
    let sheet = lettered::faces(&lettered_params, &style).map_err(|e| e.to_string())?;
    let solids = lettered::generate(&lettered_params, &style).map_err(|e| e.to_string())?;
    write_outputs(&solids, &sheet)?;

    let bead_params =
        BeadPanelParams::from_values(&values.filtered(BeadPanelParams::definitions()))
            .map_err(|e| e.to_string())?;
    let sheet = bead::faces(&bead_params, &style).map_err(|e| e.to_string())?;
    let solids = bead::generate(&bead_params, &style).map_err(|e| e.to_string())?;
    write_outputs(&solids, &sheet)?;

    println!("All panels have been written to the '{OUT_DIR}' folder.");
    Ok(())
}

fn write_outputs(
    solids: &[slotboard::Solid],
    sheet: &slotboard::panel::PanelFaces,
) -> Result<(), String> {
    for solid in solids {
        let stl_path = Path::new(OUT_DIR).join(&solid.name).with_extension("stl");
        let bytes = solid
            .to_stl_binary()
            .map_err(|e| format!("{}: {e}", solid.name))?;
        fs::write(&stl_path, bytes).map_err(|e| format!("{}: {e}", stl_path.display()))?;

        let svg_path = Path::new(OUT_DIR).join(&solid.name).with_extension("svg");
        let document = face_to_svg(&sheet.face, 5.0);
        fs::write(&svg_path, document.to_string())
            .map_err(|e| format!("{}: {e}", svg_path.display()))?;

        println!(
            "{}: {:.1} x {:.1} x {:.1} mm, {} triangles",
            solid.name,
            sheet.width,
            sheet.height,
            sheet.thickness,
            solid.mesh.triangle_count()
        );
    }
    Ok(())
}

fn list_params() {
    println!("lettered panel parameters:");
    print_defs(LetteredPanelParams::definitions());
    println!();
    println!("bead panel parameters:");
    print_defs(BeadPanelParams::definitions());
}

fn print_defs(defs: &[ParamDef]) {
    for def in defs {
        println!(
            "  {:<22} {:<5} initial {:<6} {}",
            def.name,
            match def.kind {
                slotboard::params::ParamKind::Float => "float",
                slotboard::params::ParamKind::Int => "int",
            },
            def.initial,
            def.caption
        );
    }
}
