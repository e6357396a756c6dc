//! Service types for stateful components

use crate::Result;
use async_trait::async_trait;
use std::any::Any;

/// Service trait for stateful, long-running components
#[async_trait]
pub trait Service: Send + Sync + Any {
    /// Service type name (unique identifier)
    fn service_type(&self) -> &str;

    /// Initialize the service
    async fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Start the service
    async fn start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Stop the service (cleanup)
    async fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    /// Check if service is running
    fn is_running(&self) -> bool {
        false
    }

    /// Get service health status
    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::Healthy)
    }
}

/// Service health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ServiceHealth {
    /// Service is healthy and operational
    Healthy,
    /// Service is degraded but functional
    Degraded,
    /// Service is unhealthy/not functional
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockService {
        running: bool,
    }

    #[async_trait]
    impl Service for MockService {
        fn service_type(&self) -> &str {
            "mock-service"
        }

        async fn start(&mut self) -> Result<()> {
            self.running = true;
            Ok(())
        }

        fn is_running(&self) -> bool {
            self.running
        }
    }

    #[tokio::test]
    async fn test_service_defaults() {
        let mut service = MockService { running: false };
        assert!(service.initialize().await.is_ok());
        assert!(!service.is_running());

        service.start().await.unwrap();
        assert!(service.is_running());

        let health = service.health_check().await.unwrap();
        assert_eq!(health, ServiceHealth::Healthy);
    }
}
