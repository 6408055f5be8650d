//! Two triangles next to each other, each one with its own vertex array and
//! buffer, drawn with the same program.

use support::prelude::*;

const FIRST_TRIANGLE: [f32; 9] = [
    -0.9, -0.5, 0.0, // left
    0.0, -0.5, 0.0, // right
    -0.45, 0.5, 0.0, // top
];

const SECOND_TRIANGLE: [f32; 9] = [
    0.0, -0.5, 0.0, // left
    0.9, -0.5, 0.0, // right
    0.45, 0.5, 0.0, // top
];

struct HelloTriangle {
    program: Program,
    triangles: [Mesh; 2],
}

impl HelloTriangle {
    fn new(_: &mut FrameContext) -> Result<Self> {
        let program = Program::new(
            include_str!("../../shaders/hello_triangle.vs"),
            include_str!("../../shaders/orange.fs"),
        )?;

        let params = MeshParams {
            layout: VertexLayout::build().with(0, 3).finish(),
            ..Default::default()
        };

        let triangles = [
            Mesh::new(params.clone(), &FIRST_TRIANGLE, None)?,
            Mesh::new(params, &SECOND_TRIANGLE, None)?,
        ];

        Ok(HelloTriangle { program, triangles })
    }
}

impl Application for HelloTriangle {
    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        video::state::clear(Color::slate(), None)?;

        self.program.bind()?;
        for v in &self.triangles {
            v.draw()?;
        }

        Ok(())
    }
}

fn main() {
    support::launch(settings(800, 600), HelloTriangle::new);
}
