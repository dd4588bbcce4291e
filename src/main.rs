mod color;
mod framebuffer;
mod map;
mod ppm;
mod scene;

use scene::Scene;

const DEFAULT_OUTPUT: &str = "out.ppm";

struct Options {
    width: Option<u32>,
    height: Option<u32>,
    scene_path: String,
    output: String,
    save_scene: Option<String>,
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        width: None,
        height: None,
        scene_path: "scene.json".to_string(),
        output: DEFAULT_OUTPUT.to_string(),
        save_scene: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        opts.width = Some(w);
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        opts.height = Some(h);
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1024x768)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            opts.width = Some(w);
                            opts.height = Some(h);
                        }
                    }
                    i += 1;
                }
            },
            "--scene" | "-s" => {
                if i + 1 < args.len() {
                    opts.scene_path = args[i + 1].clone();
                    i += 1;
                }
            },
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    opts.output = args[i + 1].clone();
                    i += 1;
                }
            },
            "--save-scene" => {
                if i + 1 < args.len() {
                    opts.save_scene = Some(args[i + 1].clone());
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: tilecaster [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W           Override render width");
                println!("  --height H, -h H          Override render height");
                println!("  --resolution WxH, -r WxH  Override both (e.g., 1024x768)");
                println!("  --scene FILE, -s FILE     Scene file to load (default: scene.json)");
                println!(
                    "  --output FILE, -o FILE    Output image path (default: {})",
                    DEFAULT_OUTPUT
                );
                println!("  --save-scene FILE         Write the built-in scene as JSON and exit");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    opts
}

fn main() -> Result<(), String> {
    let opts = parse_args();

    if let Some(path) = opts.save_scene {
        Scene::default().save(&path)?;
        println!("Default scene written to {}", path);
        return Ok(());
    }

    // Load scene file if present, else the built-in level
    let mut scene = Scene::load(&opts.scene_path).unwrap_or_else(|_| Scene::default());
    if let Some(w) = opts.width {
        scene.width = w;
    }
    if let Some(h) = opts.height {
        scene.height = h;
    }

    println!(
        "Rendering {}x{} map into {}x{} pixels",
        scene.map.width(),
        scene.map.height(),
        scene.width,
        scene.height
    );

    let buffer = scene.render();
    ppm::write_ppm(&opts.output, &buffer)?;
    println!("Wrote {}", opts.output);

    Ok(())
}
