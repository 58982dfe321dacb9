use clap::Parser;
use mandelbrot_explorer::{
    CliRenderController, FilePresenterPort, OutputFormat, PngFilePresenter, PpmFilePresenter,
    RenderArgs, RenderRequest,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_explorer::init_tracing();

    let args = RenderArgs::parse();
    let request = args.to_request()?;

    match args.output_format()? {
        OutputFormat::Png => render_to_file(PngFilePresenter::new(), &request, &args.output)?,
        OutputFormat::Ppm => render_to_file(PpmFilePresenter::new(), &request, &args.output)?,
    }

    Ok(())
}

fn render_to_file<P: FilePresenterPort>(
    presenter: P,
    request: &RenderRequest,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = CliRenderController::new(presenter);

    controller.render(request);
    controller.write(output)?;

    Ok(())
}
