//! A triangle with a color per vertex, which the rasterizer interpolates
//! across the fragments.

use support::prelude::*;

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // positions      // colors
    0.5, -0.5, 0.0,   1.0, 0.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,  0.0, 1.0, 0.0, // bottom left
    0.0, 0.5, 0.0,    0.0, 0.0, 1.0, // top
];

struct Shaders {
    program: Program,
    triangle: Mesh,
}

impl Shaders {
    fn new(_: &mut FrameContext) -> Result<Self> {
        let program = Program::new(
            include_str!("../../shaders/shaders.vs"),
            include_str!("../../shaders/shaders.fs"),
        )?;

        let params = MeshParams {
            layout: VertexLayout::build().with(0, 3).with(1, 3).finish(),
            ..Default::default()
        };

        let triangle = Mesh::new(params, &VERTICES, None)?;
        Ok(Shaders { program, triangle })
    }
}

impl Application for Shaders {
    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        video::state::clear(Color::slate(), None)?;

        self.program.bind()?;
        self.triangle.draw()
    }
}

fn main() {
    support::launch(settings(800, 600), Shaders::new);
}
