//! Headless match runner
//!
//! Simulates with an idle key table, draws every frame into a
//! `RecordingRenderer` and summarises the run.

use std::path::PathBuf;

use serde::Serialize;

use crate::hud::ScoreBoard;
use crate::input::InputState;
use crate::renderer::texture::TextureFormat;
use crate::renderer::{FsTextureLoader, RecordingRenderer, TextureHandle, TextureSet, draw_frame};
use crate::settings::Settings;
use crate::sim::{FrameContext, GameEvent, GameState, MatchState, tick};

/// A texture slot that loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedTexture {
    pub slot: &'static str,
    pub path: PathBuf,
    pub format: TextureFormat,
    pub width: u32,
    pub height: u32,
}

/// Summary of a headless run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub frames: u64,
    pub score: MatchState,
    pub goals: u32,
    pub paddle_hits: u32,
    pub wall_bounces: u32,
    pub draw_calls: u64,
    /// Largest single frame once expanded to triangle lists
    pub peak_frame_bytes: usize,
    pub textures: Vec<LoadedTexture>,
    pub quit_requested: bool,
}

fn loaded_textures(loader: &FsTextureLoader, set: &TextureSet) -> Vec<LoadedTexture> {
    let slots: [(&'static str, TextureHandle); 3] = [
        ("paddle", set.paddle),
        ("ball", set.ball),
        ("digits", set.digits),
    ];
    slots
        .into_iter()
        .filter_map(|(slot, handle)| {
            let info = loader.info(handle)?;
            Some(LoadedTexture {
                slot,
                path: info.path.clone(),
                format: info.format,
                width: info.width,
                height: info.height,
            })
        })
        .collect()
}

/// Run `settings.headless_frames` frames, stopping early if quit is requested
pub fn run(settings: &Settings) -> RunReport {
    let mut state = GameState::new(&settings.game);
    let mut board = ScoreBoard::new(&settings.hud);
    let mut loader = FsTextureLoader::new();
    let textures = TextureSet::load(&mut loader, &settings.textures);
    let mut renderer = RecordingRenderer::new();
    let mut input = InputState::new();
    let mut ctx = FrameContext::default();

    let mut report = RunReport {
        frames: 0,
        score: MatchState::new(),
        goals: 0,
        paddle_hits: 0,
        wall_bounces: 0,
        draw_calls: 0,
        peak_frame_bytes: 0,
        textures: loaded_textures(&loader, &textures),
        quit_requested: false,
    };

    log::info!(
        "Running {} headless frames ({} of 3 textures loaded)",
        settings.headless_frames,
        textures.loaded()
    );

    for _ in 0..settings.headless_frames {
        ctx.begin(input.sample(&settings.controls));
        input.update();
        tick(&mut state, &mut ctx);

        for event in &ctx.events {
            match event {
                GameEvent::PaddleHit { .. } => report.paddle_hits += 1,
                GameEvent::WallBounce => report.wall_bounces += 1,
                GameEvent::Goal { .. } => report.goals += 1,
            }
        }
        if ctx.should_close {
            report.quit_requested = true;
            break;
        }

        board.update(&state.score);
        renderer.clear();
        draw_frame(&state, &board, &textures, &mut renderer);
        report.peak_frame_bytes = report.peak_frame_bytes.max(renderer.triangle_bytes());
    }

    report.frames = state.frame;
    report.score = state.score;
    report.draw_calls = renderer.total_draws();
    report
}
