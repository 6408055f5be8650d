//! A textured container drawn twice: once rotating around its own center in
//! the bottom right corner, once pulsing in the top left corner.
//!
//! `Space` toggles the autonomous rotation. While it is off, `D`/`Right`
//! rotates clockwise and `A`/`Left` counter-clockwise.

use support::prelude::*;

use glsteps::math::{Matrix4, Rad, Vector3};

#[rustfmt::skip]
const VERTICES: [f32; 20] = [
    // positions      // texture coords
    0.5, 0.5, 0.0,    1.0, 1.0, // top right
    0.5, -0.5, 0.0,   1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,  0.0, 0.0, // bottom left
    -0.5, 0.5, 0.0,   0.0, 1.0, // top left
];

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

struct Transformations {
    program: Program,
    quad: Mesh,
    textures: [Texture; 2],
    rotation: Rotation,
}

impl Transformations {
    fn new(_: &mut FrameContext) -> Result<Self> {
        let program = Program::new(
            include_str!("../../shaders/transformations.vs"),
            include_str!("../../shaders/transformations.fs"),
        )?;

        let params = MeshParams {
            layout: VertexLayout::build().with(0, 3).with(1, 2).finish(),
            ..Default::default()
        };

        let quad = Mesh::new(params, &VERTICES, Some(&INDICES))?;

        let params = TextureParams {
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Linear,
            mipmap: true,
            ..Default::default()
        };

        let textures = [
            Texture::from_file(resource("container.jpg"), true, params)?,
            Texture::from_file(resource("awesomeface.png"), true, params)?,
        ];

        program.bind()?;
        program.set_uniform("texture1", 0)?;
        program.set_uniform("texture2", 1)?;

        Ok(Transformations {
            program,
            quad,
            textures,
            rotation: Rotation::default(),
        })
    }
}

impl Application for Transformations {
    fn on_update(&mut self, ctx: &mut FrameContext) -> Result<()> {
        self.rotation.update(ctx.input());
        Ok(())
    }

    fn on_render(&mut self, ctx: &mut FrameContext) -> Result<()> {
        video::state::clear(Color::slate(), None)?;

        for (unit, v) in self.textures.iter().enumerate() {
            v.bind(unit as u32)?;
        }

        self.program.bind()?;

        let transform: Matrix4<f32> = Matrix4::from_translation(Vector3::new(0.5, -0.5, 0.0))
            * Matrix4::from_angle_z(Rad(self.rotation.angle));
        self.program.set_uniform("transform", transform)?;
        self.quad.draw()?;

        let scale = ctx.time().elapsed().sin();
        let transform: Matrix4<f32> = Matrix4::from_translation(Vector3::new(-0.5, 0.5, 0.0))
            * Matrix4::from_scale(scale);
        self.program.set_uniform("transform", transform)?;
        self.quad.draw()
    }
}

fn main() {
    support::launch(settings(800, 800), Transformations::new);
}
