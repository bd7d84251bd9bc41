//! Граница с внешним collision resolver
//!
//! Симуляция НЕ делает collision detection сама: она отдаёт желаемую
//! velocity, а resolver (Godot CharacterBody3D::move_and_slide или headless
//! stub) выполняет sweep-and-slide, двигает тело и возвращает результат.

use bevy::prelude::*;

/// Результат move-and-resolve операции
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMotion {
    /// Post-collision velocity (заблокированные компоненты поглощены)
    pub velocity: Vec3,
    /// Стоит ли тело на опоре после перемещения (grounded для СЛЕДУЮЩЕГО тика)
    pub grounded: bool,
}

/// Внешний sweep-and-slide resolver
///
/// Контракт: перемещает тело по velocity за прошедший tick, скользит вдоль
/// препятствий, обновляет world transform тела и отвечает за grounded-reset
/// вертикальной velocity при контакте с опорой.
pub trait MovementResolver {
    fn move_and_resolve(&mut self, velocity: Vec3, delta: f32) -> ResolvedMotion;
}

/// Headless resolver: бесконечная горизонтальная плоскость пола
///
/// Stub вместо полноценного движка — интегрирует позицию, клампит к полу,
/// поглощает нисходящую вертикальную velocity при контакте. Достаточно для
/// headless demo и интеграционных тестов; препятствий и склонов нет.
#[derive(Debug, Clone, Copy)]
pub struct FlatGroundResolver {
    /// World position тела (владеет resolver, не ECS)
    pub position: Vec3,
    /// Высота пола (верхняя грань опоры)
    pub floor_height: f32,
}

impl FlatGroundResolver {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            floor_height: 0.0,
        }
    }
}

impl MovementResolver for FlatGroundResolver {
    fn move_and_resolve(&mut self, velocity: Vec3, delta: f32) -> ResolvedMotion {
        self.position += velocity * delta;

        let mut resolved = velocity;
        let grounded = self.position.y <= self.floor_height;
        if grounded {
            // Контакт с полом: тело останавливается на опоре,
            // нисходящая компонента поглощается
            self.position.y = self.floor_height;
            resolved.y = resolved.y.max(0.0);
        }

        ResolvedMotion {
            velocity: resolved,
            grounded,
        }
    }
}

/// NonSend slot для headless resolver'а
///
/// Godot bridge этот resource НЕ устанавливает — он двигает CharacterBody3D
/// сам на main thread, а drive_player_motion при отсутствии slot'а молча
/// пропускает tick.
pub struct ActiveResolver(pub Box<dyn MovementResolver>);
