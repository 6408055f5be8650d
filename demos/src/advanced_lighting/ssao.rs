//! Screen-space ambient occlusion on a deferred renderer.
//!
//! Every frame runs four passes: the geometry pass fills the G-buffer, the
//! SSAO pass estimates the occlusion of each pixel, the blur pass removes the
//! noise pattern and the lighting pass shades the scene with the blurred
//! occlusion as ambient factor. `E` toggles the occlusion.

use rand::rngs::StdRng;
use rand::SeedableRng;

use glsteps::ssao::{self, GBuffer, OcclusionTarget};
use support::prelude::*;

use glsteps::math::{Deg, Matrix4, Vector2, Vector3};

const LIGHT_POSITION: [f32; 3] = [2.0, 4.0, -2.0];
const LIGHT_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

const BACKGROUND: Color<f32> = NO_OCCLUSION;

struct Targets {
    gbuffer: GBuffer,
    occlusion: OcclusionTarget,
    blur: OcclusionTarget,
}

impl Targets {
    fn new(dimensions: Vector2<u32>) -> Result<Self> {
        Ok(Targets {
            gbuffer: GBuffer::new(dimensions)?,
            occlusion: OcclusionTarget::new(dimensions)?,
            blur: OcclusionTarget::new(dimensions)?,
        })
    }
}

struct Ssao {
    geometry: Program,
    occlusion: Program,
    blur: Program,
    lighting: Program,

    targets: Targets,
    noise: Texture,
    room: Mesh,
    quad: Mesh,
    backpack: Model,

    view: Matrix4<f32>,
    toggle: OcclusionToggle,
}

fn projection(aspect: f32) -> Matrix4<f32> {
    math::perspective(Deg(45.0), aspect, 0.1, 50.0)
}

fn noise_scale(dimensions: Vector2<u32>) -> Vector2<f32> {
    let n = ssao::NOISE_DIMENSION as f32;
    Vector2::new(dimensions.x as f32 / n, dimensions.y as f32 / n)
}

impl Ssao {
    fn new(ctx: &mut FrameContext) -> Result<Self> {
        video::state::enable_depth_test(true)?;

        let geometry = Program::new(
            include_str!("../../shaders/ssao_geometry.vs"),
            include_str!("../../shaders/ssao_geometry.fs"),
        )?;

        let vs = include_str!("../../shaders/ssao.vs");
        let lighting = Program::new(vs, include_str!("../../shaders/ssao_lighting.fs"))?;
        let occlusion = Program::new(vs, include_str!("../../shaders/ssao.fs"))?;
        let blur = Program::new(vs, include_str!("../../shaders/ssao_blur.fs"))?;

        let backpack = Model::upload(&ModelData::load(resource("backpack/backpack.obj"))?)?;
        let targets = Targets::new(ctx.dimensions())?;

        let mut rng = StdRng::seed_from_u64(0);
        let kernel = ssao::kernel(ssao::KERNEL_SIZE, &mut rng);
        let noise = ssao::noise_texture(&ssao::noise(
            (ssao::NOISE_DIMENSION * ssao::NOISE_DIMENSION) as usize,
            &mut rng,
        ))?;

        let view: Matrix4<f32> = Matrix4::from_angle_x(Deg(10.0))
            * Matrix4::from_translation(Vector3::new(0.0, -3.0, -10.0))
            * Matrix4::from_angle_y(Deg(-45.0));

        let light = view * Vector3::from(LIGHT_POSITION).extend(1.0);

        lighting.bind()?;
        lighting.set_uniform("light.Position", light.truncate())?;
        lighting.set_uniform("light.Color", LIGHT_COLOR)?;
        lighting.set_uniform("light.Linear", ssao::LIGHT_LINEAR)?;
        lighting.set_uniform("light.Quadratic", ssao::LIGHT_QUADRATIC)?;
        lighting.set_uniform("gPosition", 0)?;
        lighting.set_uniform("gNormal", 1)?;
        lighting.set_uniform("gAlbedo", 2)?;
        lighting.set_uniform("ssao", 3)?;

        occlusion.bind()?;
        occlusion.set_uniform("gPosition", 0)?;
        occlusion.set_uniform("gNormal", 1)?;
        occlusion.set_uniform("texNoise", 2)?;
        occlusion.set_uniform("projection", projection(ctx.aspect()))?;
        occlusion.set_uniform("noiseScale", noise_scale(ctx.dimensions()))?;
        occlusion.set_uniform_vec3_array("samples", &kernel)?;

        blur.bind()?;
        blur.set_uniform("ssaoInput", 0)?;

        geometry.bind()?;
        geometry.set_uniform("projection", projection(ctx.aspect()))?;
        geometry.set_uniform("view", view)?;

        Ok(Ssao {
            geometry,
            occlusion,
            blur,
            lighting,
            targets,
            noise,
            room: video::primitives::cube()?,
            quad: video::primitives::quad()?,
            backpack,
            view,
            toggle: OcclusionToggle::default(),
        })
    }

    fn geometry_pass(&self) -> Result<()> {
        self.targets.gbuffer.framebuffer.bind()?;
        video::state::clear(BACKGROUND, 1.0)?;

        self.geometry.bind()?;

        let model: Matrix4<f32> =
            Matrix4::from_translation(Vector3::new(0.0, 7.0, 0.0)) * Matrix4::from_scale(7.5);
        self.geometry.set_uniform("model", model)?;
        self.geometry.set_uniform("invertedNormals", true)?;
        self.room.draw()?;

        let model: Matrix4<f32> = Matrix4::from_translation(Vector3::new(0.0, 0.5, 0.0))
            * Matrix4::from_angle_y(Deg(-70.0))
            * Matrix4::from_angle_x(Deg(-90.0));
        self.geometry.set_uniform("model", model)?;
        self.geometry.set_uniform("invertedNormals", false)?;
        self.backpack.draw(&self.geometry)
    }

    fn occlusion_pass(&self) -> Result<()> {
        let gbuffer = &self.targets.gbuffer;

        self.targets.occlusion.framebuffer.bind()?;
        video::state::clear(NO_OCCLUSION, None)?;

        if self.toggle.pass() == OcclusionPass::ClearOnly {
            return Ok(());
        }

        self.occlusion.bind()?;
        gbuffer.position.bind(0)?;
        gbuffer.normal.bind(1)?;
        self.noise.bind(2)?;
        self.quad.draw()
    }

    fn blur_pass(&self) -> Result<()> {
        self.targets.blur.framebuffer.bind()?;
        video::state::clear(BACKGROUND, None)?;

        self.blur.bind()?;
        self.targets.occlusion.color.bind(0)?;
        self.quad.draw()
    }

    fn lighting_pass(&self) -> Result<()> {
        let gbuffer = &self.targets.gbuffer;

        Framebuffer::bind_default()?;
        video::state::clear(BACKGROUND, 1.0)?;

        self.lighting.bind()?;
        gbuffer.position.bind(0)?;
        gbuffer.normal.bind(1)?;
        gbuffer.albedo.bind(2)?;
        self.targets.blur.color.bind(3)?;
        self.quad.draw()
    }
}

impl Application for Ssao {
    fn on_update(&mut self, ctx: &mut FrameContext) -> Result<()> {
        self.toggle.update(ctx.input());
        Ok(())
    }

    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        self.geometry_pass()?;
        self.occlusion_pass()?;
        self.blur_pass()?;
        self.lighting_pass()
    }

    fn on_resize(&mut self, ctx: &mut FrameContext, dimensions: Vector2<u32>) -> Result<()> {
        if dimensions.x == 0 || dimensions.y == 0 {
            return Ok(());
        }

        self.targets = Targets::new(dimensions)?;

        self.occlusion.bind()?;
        self.occlusion.set_uniform("projection", projection(ctx.aspect()))?;
        self.occlusion.set_uniform("noiseScale", noise_scale(dimensions))?;

        self.geometry.bind()?;
        self.geometry.set_uniform("projection", projection(ctx.aspect()))?;
        self.geometry.set_uniform("view", self.view)
    }
}

fn main() {
    support::launch(settings(800, 600), Ssao::new);
}
