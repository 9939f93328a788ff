//! Host-based end-to-end tests for the Growver OTA path
//! These tests run on the development machine, not on the ESP32
