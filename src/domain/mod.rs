pub mod city;
pub mod notification;
