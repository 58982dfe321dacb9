use mandelbrot_explorer::{PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_explorer::init_tracing();

    let presenter_factory = PixelsPresenterFactory::new();
    let command = RunGuiCommand::new(presenter_factory);

    command.execute()
}
