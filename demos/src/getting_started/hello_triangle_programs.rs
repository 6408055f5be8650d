//! The same two triangles, each drawn with a program of its own: an orange
//! one and a yellow one.

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

struct HelloTrianglePrograms {
    passes: Vec<(Program, Mesh)>,
}

impl HelloTrianglePrograms {
    fn new(_: &mut FrameContext) -> Result<Self> {
        let vs = include_str!("../../shaders/hello_triangle.vs");
        let orange = Program::new(vs, include_str!("../../shaders/orange.fs"))?;
        let yellow = Program::new(vs, include_str!("../../shaders/yellow.fs"))?;

        let params = MeshParams {
            layout: VertexLayout::build().with(0, 3).finish(),
            ..Default::default()
        };

        let first = Mesh::new(params.clone(), &FIRST_TRIANGLE, None)?;
        let second = Mesh::new(params, &SECOND_TRIANGLE, None)?;

        Ok(HelloTrianglePrograms {
            passes: vec![(orange, first), (yellow, second)],
        })
    }
}

impl Application for HelloTrianglePrograms {
    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        video::state::clear(Color::slate(), None)?;

        for (program, mesh) in &self.passes {
            program.bind()?;
            mesh.draw()?;
        }

        Ok(())
    }
}

fn main() {
    support::launch(settings(800, 600), HelloTrianglePrograms::new);
}
