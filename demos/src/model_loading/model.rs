//! Loads the backpack model with its material textures and draws it turned
//! 45 degrees around the y axis.

use support::prelude::*;

use glsteps::math::{Deg, Matrix4, SquareMatrix, Vector3};

struct ModelLoading {
    program: Program,
    model: Model,
}

impl ModelLoading {
    fn new(_: &mut FrameContext) -> Result<Self> {
        video::state::enable_depth_test(true)?;

        let program = Program::new(
            include_str!("../../shaders/model.vs"),
            include_str!("../../shaders/model.fs"),
        )?;

        let data = ModelData::load(resource("backpack/backpack.obj"))?;
        let model = Model::upload(&data)?;

        Ok(ModelLoading { program, model })
    }
}

impl Application for ModelLoading {
    fn on_render(&mut self, ctx: &mut FrameContext) -> Result<()> {
        video::state::clear(Color::new(0.05f32, 0.05, 0.05, 1.0), 1.0)?;

        self.program.bind()?;

        let projection = math::perspective(Deg(45.0), ctx.aspect(), 0.1, 100.0);
        self.program.set_uniform("projection", projection)?;
        self.program.set_uniform("view", Matrix4::<f32>::identity())?;

        let model: Matrix4<f32> = Matrix4::from_translation(Vector3::new(0.0, 0.0, -6.0))
            * Matrix4::from_angle_y(Deg(45.0));
        self.program.set_uniform("model", model)?;

        self.model.draw(&self.program)
    }
}

fn main() {
    let mut settings = settings(800, 600);
    settings.window.cursor_grab = true;
    support::launch(settings, ModelLoading::new);
}
