//! Psychology Service
//!
//! Shares one `ProfileRepository` between the plugin host and any number of
//! callers. Clones are cheap and all point at the same store and the same
//! lifecycle state.

use super::repository::{ProfileRepository, RepositoryStats};
use crate::config::PsychologyConfig;
use crate::types::*;
use async_trait::async_trait;
use muse_core::{MuseError, Result, Service, ServiceHealth};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Service wrapper around the profile repository
#[derive(Debug, Clone)]
pub struct PsychologyService {
    repository: Arc<RwLock<ProfileRepository>>,
    running: Arc<AtomicBool>,
}

impl PsychologyService {
    /// Create a service over an empty repository
    pub fn new(config: PsychologyConfig) -> Self {
        Self::from_repository(ProfileRepository::with_config(config))
    }

    /// Wrap an existing repository
    pub fn from_repository(repository: ProfileRepository) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ProfileRepository>> {
        self.repository
            .read()
            .map_err(|e| MuseError::runtime(format!("profile repository lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ProfileRepository>> {
        self.repository
            .write()
            .map_err(|e| MuseError::runtime(format!("profile repository lock poisoned: {}", e)))
    }

    /// Current configuration
    pub fn config(&self) -> Result<PsychologyConfig> {
        Ok(*self.read()?.config())
    }

    /// Replace the configuration; stored profiles are left as they are
    pub fn reconfigure(&self, config: PsychologyConfig) -> Result<()> {
        self.write()?.set_config(config);
        Ok(())
    }

    /// See [`ProfileRepository::create_profile`]
    pub fn create_profile(
        &self,
        character_id: impl Into<String>,
        character_name: impl Into<String>,
        draft: ProfileDraft,
    ) -> Result<PsychologyProfile> {
        Ok(self.write()?.create_profile(character_id, character_name, draft))
    }

    /// Snapshot of a profile
    pub fn get_profile(&self, id: &str) -> Result<Option<PsychologyProfile>> {
        Ok(self.read()?.get_profile(id).cloned())
    }

    /// Snapshot of the most recent profile for a character
    pub fn get_profile_by_character(&self, character_id: &str) -> Result<Option<PsychologyProfile>> {
        Ok(self.read()?.get_profile_by_character(character_id).cloned())
    }

    /// Snapshots of all profiles, oldest first
    pub fn list_profiles(&self) -> Result<Vec<PsychologyProfile>> {
        Ok(self.read()?.list_profiles().into_iter().cloned().collect())
    }

    /// Remove a profile
    pub fn remove_profile(&self, id: &str) -> Result<Option<PsychologyProfile>> {
        Ok(self.write()?.remove_profile(id))
    }

    /// See [`ProfileRepository::update_profile`]
    pub fn update_profile(&self, id: &str, update: ProfileUpdate) -> Result<PsychologyProfile> {
        self.write()?.update_profile(id, update)
    }

    /// See [`ProfileRepository::add_motivation`]
    pub fn add_motivation(
        &self,
        id: &str,
        motivation: NewMotivation,
        parent_id: Option<&str>,
    ) -> Result<Motivation> {
        self.write()?.add_motivation(id, motivation, parent_id)
    }

    /// See [`ProfileRepository::add_conflict`]
    pub fn add_conflict(&self, id: &str, conflict: NewConflict) -> Result<InternalConflict> {
        self.write()?.add_conflict(id, conflict)
    }

    /// See [`ProfileRepository::resolve_conflict`]
    pub fn resolve_conflict(
        &self,
        id: &str,
        conflict_id: &str,
        resolution_path: impl Into<String>,
        scene_id: Option<String>,
    ) -> Result<bool> {
        Ok(self
            .write()?
            .resolve_conflict(id, conflict_id, resolution_path, scene_id))
    }

    /// See [`ProfileRepository::predict_behavior_for_character`]
    pub fn predict_behavior_for_character(&self, id: &str, situation: &str) -> Result<BehaviorPrediction> {
        self.read()?.predict_behavior_for_character(id, situation)
    }

    /// See [`ProfileRepository::export_profile`]
    pub fn export_profile(&self, id: &str) -> Result<String> {
        self.read()?.export_profile(id)
    }

    /// See [`ProfileRepository::import_profile`]
    pub fn import_profile(&self, json: &str) -> Result<PsychologyProfile> {
        self.write()?.import_profile(json)
    }

    /// Repository statistics
    pub fn stats(&self) -> Result<RepositoryStats> {
        Ok(self.read()?.stats())
    }
}

impl Default for PsychologyService {
    fn default() -> Self {
        Self::new(PsychologyConfig::default())
    }
}

#[async_trait]
impl Service for PsychologyService {
    fn service_type(&self) -> &str {
        "psychology"
    }

    async fn initialize(&mut self) -> Result<()> {
        let config = self.config()?;
        tracing::info!(
            auto_detect_conflicts = config.auto_detect_conflicts,
            auto_classify_archetypes = config.auto_classify_archetypes,
            "Psychology service initialized"
        );
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        self.running.store(true, Ordering::SeqCst);
        tracing::info!("Psychology service started");
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.running.store(false, Ordering::SeqCst);
        tracing::info!("Psychology service stopped");
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        if self.repository.is_poisoned() {
            return Ok(ServiceHealth::Unhealthy);
        }
        Ok(ServiceHealth::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lifecycle() {
        let mut service = PsychologyService::default();
        assert_eq!(service.service_type(), "psychology");
        assert!(!service.is_running());

        service.initialize().await.unwrap();
        service.start().await.unwrap();
        assert!(service.is_running());
        assert_eq!(service.health_check().await.unwrap(), ServiceHealth::Healthy);

        service.stop().await.unwrap();
        assert!(!service.is_running());
    }

    #[tokio::test]
    async fn test_clones_share_lifecycle_state() {
        let mut service = PsychologyService::default();
        let observer = service.clone();
        let as_trait: Arc<dyn Service> = Arc::new(service.clone());

        service.start().await.unwrap();
        assert!(observer.is_running());
        assert!(as_trait.is_running());

        service.stop().await.unwrap();
        assert!(!observer.is_running());
        assert!(!as_trait.is_running());
    }

    #[tokio::test]
    async fn test_clones_share_the_repository() {
        let service = PsychologyService::default();
        let other = service.clone();

        let created = service
            .create_profile("char-1", "Mara", ProfileDraft::default())
            .unwrap();
        let seen = other.get_profile(&created.id).unwrap();
        assert_eq!(seen.map(|p| p.character_name), Some("Mara".to_string()));
        assert_eq!(other.stats().unwrap().profiles, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creation() {
        let service = PsychologyService::default();
        let mut handles = Vec::new();
        for i in 0..8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .create_profile(format!("char-{}", i), format!("Character {}", i), ProfileDraft::default())
                    .map(|p| p.id)
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(service.list_profiles().unwrap().len(), 8);
    }

    #[test]
    fn test_reconfigure() {
        let service = PsychologyService::default();
        service
            .reconfigure(PsychologyConfig::default().without_conflict_detection())
            .unwrap();
        assert!(!service.config().unwrap().auto_detect_conflicts);
    }

    #[test]
    fn test_errors_pass_through() {
        let service = PsychologyService::default();
        assert!(service.export_profile("missing").unwrap_err().is_not_found());
        assert!(!service.resolve_conflict("missing", "c", "path", None).unwrap());
        assert!(service.get_profile("missing").unwrap().is_none());
    }
}
