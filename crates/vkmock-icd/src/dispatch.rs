//! Name-to-entry-point resolution.
//!
//! One table is built on first lookup from every entry point the driver
//! exports. Names are not filtered by the extensions an instance or device
//! actually enabled; anything implemented resolves.

use std::collections::HashMap;
use std::ffi::{c_char, CStr};
use std::sync::OnceLock;

use ash::vk;

use crate::{
    acceleration, command, descriptor, device, display, image, instance, memory, physical_device,
    pipeline, renderpass, swapchain, sync,
};

/// Which proc-addr query may hand out an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandScope {
    /// Loader-facing `vk_icd*` functions and calls made without an instance.
    Global,
    Instance,
    /// Takes a `VkPhysicalDevice` as its first parameter.
    PhysicalDevice,
    Device,
}

/// A resolved entry point.
#[derive(Clone, Copy)]
pub struct Command {
    pub scope: CommandScope,
    pub func: unsafe extern "system" fn(),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("scope", &self.scope)
            .field("func", &(self.func as *const ()))
            .finish()
    }
}

/// Immutable name → entry point table.
pub struct DispatchTable {
    commands: HashMap<&'static str, Command>,
}

impl DispatchTable {
    pub fn resolve(&self, name: &str) -> Option<Command> {
        self.commands.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn count_scope(&self, scope: CommandScope) -> usize {
        self.commands.values().filter(|c| c.scope == scope).count()
    }
}

/// Builds the table. Every entry is `"name" => path::to::fn`; several names
/// may point at the same function for promoted extension aliases.
macro_rules! command_table {
    ($($scope:ident { $($name:literal => $func:path),* $(,)? })*) => {{
        let mut commands: HashMap<&'static str, Command> = HashMap::new();
        $($(
            commands.insert(
                $name,
                Command {
                    scope: CommandScope::$scope,
                    // SAFETY: callers cast back to the real PFN type for `$name`.
                    func: unsafe {
                        std::mem::transmute::<*const (), unsafe extern "system" fn()>(
                            $func as *const (),
                        )
                    },
                },
            );
        )*)*
        commands
    }};
}

static TABLE: OnceLock<DispatchTable> = OnceLock::new();

pub fn table() -> &'static DispatchTable {
    TABLE.get_or_init(build)
}

pub fn lookup(name: &str) -> Option<Command> {
    table().resolve(name)
}

/// Resolve a C command name for `vkGetInstanceProcAddr` and
/// `vkGetDeviceProcAddr`. Null or unknown names give `None`.
pub unsafe fn resolve(p_name: *const c_char) -> vk::PFN_vkVoidFunction {
    let name = c_name(p_name)?;
    match lookup(name) {
        Some(command) => Some(command.func),
        None => {
            tracing::debug!("unresolved command {}", name);
            None
        }
    }
}

/// Like [`resolve`] but only for commands dispatched on a physical device.
pub unsafe fn resolve_physical_device(p_name: *const c_char) -> vk::PFN_vkVoidFunction {
    let name = c_name(p_name)?;
    lookup(name)
        .filter(|c| c.scope == CommandScope::PhysicalDevice)
        .map(|c| c.func)
}

unsafe fn c_name<'a>(p_name: *const c_char) -> Option<&'a str> {
    if p_name.is_null() {
        return None;
    }
    CStr::from_ptr(p_name).to_str().ok()
}

fn build() -> DispatchTable {
    let commands = command_table! {
        Global {
            "vk_icdNegotiateLoaderICDInterfaceVersion" => crate::vk_icdNegotiateLoaderICDInterfaceVersion,
            "vk_icdGetInstanceProcAddr" => crate::vk_icdGetInstanceProcAddr,
            "vk_icdGetPhysicalDeviceProcAddr" => crate::vk_icdGetPhysicalDeviceProcAddr,
            "vkCreateInstance" => instance::vkCreateInstance,
            "vkEnumerateInstanceVersion" => instance::vkEnumerateInstanceVersion,
            "vkEnumerateInstanceExtensionProperties" => instance::vkEnumerateInstanceExtensionProperties,
            "vkEnumerateInstanceLayerProperties" => instance::vkEnumerateInstanceLayerProperties,
            "vkGetInstanceProcAddr" => instance::vkGetInstanceProcAddr,
        }
        Instance {
            "vkDestroyInstance" => instance::vkDestroyInstance,
            "vkEnumeratePhysicalDevices" => instance::vkEnumeratePhysicalDevices,
            "vkEnumeratePhysicalDeviceGroups" => instance::vkEnumeratePhysicalDeviceGroups,
            "vkEnumeratePhysicalDeviceGroupsKHR" => instance::vkEnumeratePhysicalDeviceGroups,
            "vkCreateHeadlessSurfaceEXT" => swapchain::vkCreateHeadlessSurfaceEXT,
            "vkDestroySurfaceKHR" => swapchain::vkDestroySurfaceKHR,
            "vkCreateDisplayPlaneSurfaceKHR" => display::vkCreateDisplayPlaneSurfaceKHR,
        }
        PhysicalDevice {
            "vkGetPhysicalDeviceProperties" => physical_device::vkGetPhysicalDeviceProperties,
            "vkGetPhysicalDeviceProperties2" => physical_device::vkGetPhysicalDeviceProperties2,
            "vkGetPhysicalDeviceProperties2KHR" => physical_device::vkGetPhysicalDeviceProperties2,
            "vkGetPhysicalDeviceFeatures" => physical_device::vkGetPhysicalDeviceFeatures,
            "vkGetPhysicalDeviceFeatures2" => physical_device::vkGetPhysicalDeviceFeatures2,
            "vkGetPhysicalDeviceFeatures2KHR" => physical_device::vkGetPhysicalDeviceFeatures2,
            "vkGetPhysicalDeviceMemoryProperties" => physical_device::vkGetPhysicalDeviceMemoryProperties,
            "vkGetPhysicalDeviceMemoryProperties2" => physical_device::vkGetPhysicalDeviceMemoryProperties2,
            "vkGetPhysicalDeviceMemoryProperties2KHR" => physical_device::vkGetPhysicalDeviceMemoryProperties2,
            "vkGetPhysicalDeviceQueueFamilyProperties" => physical_device::vkGetPhysicalDeviceQueueFamilyProperties,
            "vkGetPhysicalDeviceQueueFamilyProperties2" => physical_device::vkGetPhysicalDeviceQueueFamilyProperties2,
            "vkGetPhysicalDeviceQueueFamilyProperties2KHR" => physical_device::vkGetPhysicalDeviceQueueFamilyProperties2,
            "vkGetPhysicalDeviceFormatProperties" => physical_device::vkGetPhysicalDeviceFormatProperties,
            "vkGetPhysicalDeviceFormatProperties2" => physical_device::vkGetPhysicalDeviceFormatProperties2,
            "vkGetPhysicalDeviceFormatProperties2KHR" => physical_device::vkGetPhysicalDeviceFormatProperties2,
            "vkGetPhysicalDeviceImageFormatProperties" => physical_device::vkGetPhysicalDeviceImageFormatProperties,
            "vkGetPhysicalDeviceImageFormatProperties2" => physical_device::vkGetPhysicalDeviceImageFormatProperties2,
            "vkGetPhysicalDeviceImageFormatProperties2KHR" => physical_device::vkGetPhysicalDeviceImageFormatProperties2,
            "vkGetPhysicalDeviceSparseImageFormatProperties" => physical_device::vkGetPhysicalDeviceSparseImageFormatProperties,
            "vkGetPhysicalDeviceSparseImageFormatProperties2" => physical_device::vkGetPhysicalDeviceSparseImageFormatProperties2,
            "vkGetPhysicalDeviceSparseImageFormatProperties2KHR" => physical_device::vkGetPhysicalDeviceSparseImageFormatProperties2,
            "vkGetPhysicalDeviceExternalBufferProperties" => physical_device::vkGetPhysicalDeviceExternalBufferProperties,
            "vkGetPhysicalDeviceExternalBufferPropertiesKHR" => physical_device::vkGetPhysicalDeviceExternalBufferProperties,
            "vkGetPhysicalDeviceExternalFenceProperties" => physical_device::vkGetPhysicalDeviceExternalFenceProperties,
            "vkGetPhysicalDeviceExternalFencePropertiesKHR" => physical_device::vkGetPhysicalDeviceExternalFenceProperties,
            "vkGetPhysicalDeviceExternalSemaphoreProperties" => physical_device::vkGetPhysicalDeviceExternalSemaphoreProperties,
            "vkGetPhysicalDeviceExternalSemaphorePropertiesKHR" => physical_device::vkGetPhysicalDeviceExternalSemaphoreProperties,
            "vkEnumerateDeviceExtensionProperties" => physical_device::vkEnumerateDeviceExtensionProperties,
            "vkEnumerateDeviceLayerProperties" => physical_device::vkEnumerateDeviceLayerProperties,
            "vkGetPhysicalDeviceSurfaceSupportKHR" => swapchain::vkGetPhysicalDeviceSurfaceSupportKHR,
            "vkGetPhysicalDeviceSurfaceCapabilitiesKHR" => swapchain::vkGetPhysicalDeviceSurfaceCapabilitiesKHR,
            "vkGetPhysicalDeviceSurfaceCapabilities2KHR" => swapchain::vkGetPhysicalDeviceSurfaceCapabilities2KHR,
            "vkGetPhysicalDeviceSurfaceFormatsKHR" => swapchain::vkGetPhysicalDeviceSurfaceFormatsKHR,
            "vkGetPhysicalDeviceSurfaceFormats2KHR" => swapchain::vkGetPhysicalDeviceSurfaceFormats2KHR,
            "vkGetPhysicalDeviceSurfacePresentModesKHR" => swapchain::vkGetPhysicalDeviceSurfacePresentModesKHR,
            "vkGetPhysicalDeviceMultisamplePropertiesEXT" => physical_device::vkGetPhysicalDeviceMultisamplePropertiesEXT,
            "vkGetPhysicalDeviceFragmentShadingRatesKHR" => physical_device::vkGetPhysicalDeviceFragmentShadingRatesKHR,
            "vkGetPhysicalDeviceCalibrateableTimeDomainsKHR" => physical_device::vkGetPhysicalDeviceCalibrateableTimeDomainsKHR,
            "vkGetPhysicalDeviceCalibrateableTimeDomainsEXT" => physical_device::vkGetPhysicalDeviceCalibrateableTimeDomainsKHR,
            "vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR" => physical_device::vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR,
            "vkGetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR" => physical_device::vkGetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR,
            "vkGetPhysicalDeviceDisplayPropertiesKHR" => display::vkGetPhysicalDeviceDisplayPropertiesKHR,
            "vkGetPhysicalDeviceDisplayPlanePropertiesKHR" => display::vkGetPhysicalDeviceDisplayPlanePropertiesKHR,
            "vkGetDisplayPlaneSupportedDisplaysKHR" => display::vkGetDisplayPlaneSupportedDisplaysKHR,
            "vkGetDisplayModePropertiesKHR" => display::vkGetDisplayModePropertiesKHR,
            "vkCreateDisplayModeKHR" => display::vkCreateDisplayModeKHR,
            "vkGetDisplayPlaneCapabilitiesKHR" => display::vkGetDisplayPlaneCapabilitiesKHR,
            "vkCreateDevice" => device::vkCreateDevice,
        }
        Device {
            "vkGetDeviceProcAddr" => device::vkGetDeviceProcAddr,
            "vkDestroyDevice" => device::vkDestroyDevice,
            "vkGetDeviceQueue" => device::vkGetDeviceQueue,
            "vkGetDeviceQueue2" => device::vkGetDeviceQueue2,
            "vkDeviceWaitIdle" => device::vkDeviceWaitIdle,
            "vkQueueWaitIdle" => device::vkQueueWaitIdle,
            "vkQueueSubmit" => device::vkQueueSubmit,
            "vkQueueSubmit2" => device::vkQueueSubmit2,
            "vkQueueSubmit2KHR" => device::vkQueueSubmit2,
            "vkQueueBindSparse" => device::vkQueueBindSparse,
            "vkCreatePrivateDataSlot" => device::vkCreatePrivateDataSlot,
            "vkCreatePrivateDataSlotEXT" => device::vkCreatePrivateDataSlot,
            "vkDestroyPrivateDataSlot" => device::vkDestroyPrivateDataSlot,
            "vkDestroyPrivateDataSlotEXT" => device::vkDestroyPrivateDataSlot,
            "vkSetPrivateData" => device::vkSetPrivateData,
            "vkSetPrivateDataEXT" => device::vkSetPrivateData,
            "vkGetPrivateData" => device::vkGetPrivateData,
            "vkGetPrivateDataEXT" => device::vkGetPrivateData,

            "vkAllocateMemory" => memory::vkAllocateMemory,
            "vkFreeMemory" => memory::vkFreeMemory,
            "vkMapMemory" => memory::vkMapMemory,
            "vkUnmapMemory" => memory::vkUnmapMemory,
            "vkMapMemory2KHR" => memory::vkMapMemory2KHR,
            "vkUnmapMemory2KHR" => memory::vkUnmapMemory2KHR,
            "vkFlushMappedMemoryRanges" => memory::vkFlushMappedMemoryRanges,
            "vkInvalidateMappedMemoryRanges" => memory::vkInvalidateMappedMemoryRanges,
            "vkGetDeviceMemoryCommitment" => memory::vkGetDeviceMemoryCommitment,
            "vkCreateBuffer" => memory::vkCreateBuffer,
            "vkDestroyBuffer" => memory::vkDestroyBuffer,
            "vkBindBufferMemory" => memory::vkBindBufferMemory,
            "vkBindBufferMemory2" => memory::vkBindBufferMemory2,
            "vkBindBufferMemory2KHR" => memory::vkBindBufferMemory2,
            "vkGetBufferMemoryRequirements" => memory::vkGetBufferMemoryRequirements,
            "vkGetBufferMemoryRequirements2" => memory::vkGetBufferMemoryRequirements2,
            "vkGetBufferMemoryRequirements2KHR" => memory::vkGetBufferMemoryRequirements2,
            "vkGetDeviceBufferMemoryRequirements" => memory::vkGetDeviceBufferMemoryRequirements,
            "vkGetDeviceBufferMemoryRequirementsKHR" => memory::vkGetDeviceBufferMemoryRequirements,
            "vkGetBufferDeviceAddress" => memory::vkGetBufferDeviceAddress,
            "vkGetBufferDeviceAddressKHR" => memory::vkGetBufferDeviceAddress,
            "vkGetBufferDeviceAddressEXT" => memory::vkGetBufferDeviceAddress,
            "vkGetBufferOpaqueCaptureAddress" => memory::vkGetBufferOpaqueCaptureAddress,
            "vkGetBufferOpaqueCaptureAddressKHR" => memory::vkGetBufferOpaqueCaptureAddress,
            "vkGetDeviceMemoryOpaqueCaptureAddress" => memory::vkGetDeviceMemoryOpaqueCaptureAddress,
            "vkGetDeviceMemoryOpaqueCaptureAddressKHR" => memory::vkGetDeviceMemoryOpaqueCaptureAddress,
            "vkCreateBufferView" => memory::vkCreateBufferView,
            "vkDestroyBufferView" => memory::vkDestroyBufferView,
            "vkGetMemoryFdKHR" => memory::vkGetMemoryFdKHR,
            "vkGetMemoryHostPointerPropertiesEXT" => memory::vkGetMemoryHostPointerPropertiesEXT,

            "vkCreateImage" => image::vkCreateImage,
            "vkDestroyImage" => image::vkDestroyImage,
            "vkBindImageMemory" => image::vkBindImageMemory,
            "vkBindImageMemory2" => image::vkBindImageMemory2,
            "vkBindImageMemory2KHR" => image::vkBindImageMemory2,
            "vkGetImageMemoryRequirements" => image::vkGetImageMemoryRequirements,
            "vkGetImageMemoryRequirements2" => image::vkGetImageMemoryRequirements2,
            "vkGetImageMemoryRequirements2KHR" => image::vkGetImageMemoryRequirements2,
            "vkGetDeviceImageMemoryRequirements" => image::vkGetDeviceImageMemoryRequirements,
            "vkGetDeviceImageMemoryRequirementsKHR" => image::vkGetDeviceImageMemoryRequirements,
            "vkGetImageSparseMemoryRequirements" => image::vkGetImageSparseMemoryRequirements,
            "vkGetImageSparseMemoryRequirements2" => image::vkGetImageSparseMemoryRequirements2,
            "vkGetImageSparseMemoryRequirements2KHR" => image::vkGetImageSparseMemoryRequirements2,
            "vkGetImageSubresourceLayout" => image::vkGetImageSubresourceLayout,
            "vkCreateImageView" => image::vkCreateImageView,
            "vkDestroyImageView" => image::vkDestroyImageView,
            "vkCreateSampler" => image::vkCreateSampler,
            "vkDestroySampler" => image::vkDestroySampler,
            "vkCreateSamplerYcbcrConversion" => image::vkCreateSamplerYcbcrConversion,
            "vkCreateSamplerYcbcrConversionKHR" => image::vkCreateSamplerYcbcrConversion,
            "vkDestroySamplerYcbcrConversion" => image::vkDestroySamplerYcbcrConversion,
            "vkDestroySamplerYcbcrConversionKHR" => image::vkDestroySamplerYcbcrConversion,

            "vkCreateSwapchainKHR" => swapchain::vkCreateSwapchainKHR,
            "vkDestroySwapchainKHR" => swapchain::vkDestroySwapchainKHR,
            "vkGetSwapchainImagesKHR" => swapchain::vkGetSwapchainImagesKHR,
            "vkAcquireNextImageKHR" => swapchain::vkAcquireNextImageKHR,
            "vkAcquireNextImage2KHR" => swapchain::vkAcquireNextImage2KHR,
            "vkQueuePresentKHR" => swapchain::vkQueuePresentKHR,

            "vkCreateCommandPool" => command::vkCreateCommandPool,
            "vkDestroyCommandPool" => command::vkDestroyCommandPool,
            "vkResetCommandPool" => command::vkResetCommandPool,
            "vkTrimCommandPool" => command::vkTrimCommandPool,
            "vkTrimCommandPoolKHR" => command::vkTrimCommandPool,
            "vkAllocateCommandBuffers" => command::vkAllocateCommandBuffers,
            "vkFreeCommandBuffers" => command::vkFreeCommandBuffers,
            "vkBeginCommandBuffer" => command::vkBeginCommandBuffer,
            "vkEndCommandBuffer" => command::vkEndCommandBuffer,
            "vkResetCommandBuffer" => command::vkResetCommandBuffer,
            "vkCmdBindPipeline" => command::vkCmdBindPipeline,
            "vkCmdBindDescriptorSets" => command::vkCmdBindDescriptorSets,
            "vkCmdPushConstants" => command::vkCmdPushConstants,
            "vkCmdBindVertexBuffers" => command::vkCmdBindVertexBuffers,
            "vkCmdBindIndexBuffer" => command::vkCmdBindIndexBuffer,
            "vkCmdDispatch" => command::vkCmdDispatch,
            "vkCmdDraw" => command::vkCmdDraw,
            "vkCmdDrawIndexed" => command::vkCmdDrawIndexed,
            "vkCmdPipelineBarrier" => command::vkCmdPipelineBarrier,
            "vkCmdPipelineBarrier2" => command::vkCmdPipelineBarrier2,
            "vkCmdPipelineBarrier2KHR" => command::vkCmdPipelineBarrier2,
            "vkCmdCopyBuffer" => command::vkCmdCopyBuffer,
            "vkCmdCopyBufferToImage" => command::vkCmdCopyBufferToImage,
            "vkCmdCopyImageToBuffer" => command::vkCmdCopyImageToBuffer,
            "vkCmdFillBuffer" => command::vkCmdFillBuffer,
            "vkCmdUpdateBuffer" => command::vkCmdUpdateBuffer,
            "vkCmdBeginRenderPass" => command::vkCmdBeginRenderPass,
            "vkCmdEndRenderPass" => command::vkCmdEndRenderPass,
            "vkCmdSetViewport" => command::vkCmdSetViewport,
            "vkCmdSetScissor" => command::vkCmdSetScissor,
            "vkCmdResetQueryPool" => command::vkCmdResetQueryPool,
            "vkCmdWriteTimestamp" => command::vkCmdWriteTimestamp,
            "vkCmdExecuteCommands" => command::vkCmdExecuteCommands,

            "vkCreateFence" => sync::vkCreateFence,
            "vkDestroyFence" => sync::vkDestroyFence,
            "vkResetFences" => sync::vkResetFences,
            "vkGetFenceStatus" => sync::vkGetFenceStatus,
            "vkWaitForFences" => sync::vkWaitForFences,
            "vkGetFenceFdKHR" => sync::vkGetFenceFdKHR,
            "vkCreateSemaphore" => sync::vkCreateSemaphore,
            "vkDestroySemaphore" => sync::vkDestroySemaphore,
            "vkGetSemaphoreCounterValue" => sync::vkGetSemaphoreCounterValue,
            "vkGetSemaphoreCounterValueKHR" => sync::vkGetSemaphoreCounterValue,
            "vkWaitSemaphores" => sync::vkWaitSemaphores,
            "vkWaitSemaphoresKHR" => sync::vkWaitSemaphores,
            "vkSignalSemaphore" => sync::vkSignalSemaphore,
            "vkSignalSemaphoreKHR" => sync::vkSignalSemaphore,
            "vkCreateEvent" => sync::vkCreateEvent,
            "vkDestroyEvent" => sync::vkDestroyEvent,
            "vkGetEventStatus" => sync::vkGetEventStatus,
            "vkSetEvent" => sync::vkSetEvent,
            "vkResetEvent" => sync::vkResetEvent,
            "vkCreateQueryPool" => sync::vkCreateQueryPool,
            "vkDestroyQueryPool" => sync::vkDestroyQueryPool,
            "vkGetQueryPoolResults" => sync::vkGetQueryPoolResults,
            "vkResetQueryPool" => sync::vkResetQueryPool,
            "vkResetQueryPoolEXT" => sync::vkResetQueryPool,
            "vkGetCalibratedTimestampsKHR" => sync::vkGetCalibratedTimestampsKHR,
            "vkGetCalibratedTimestampsEXT" => sync::vkGetCalibratedTimestampsKHR,

            "vkCreateShaderModule" => pipeline::vkCreateShaderModule,
            "vkDestroyShaderModule" => pipeline::vkDestroyShaderModule,
            "vkGetShaderModuleIdentifierEXT" => pipeline::vkGetShaderModuleIdentifierEXT,
            "vkGetShaderModuleCreateInfoIdentifierEXT" => pipeline::vkGetShaderModuleCreateInfoIdentifierEXT,
            "vkCreatePipelineCache" => pipeline::vkCreatePipelineCache,
            "vkDestroyPipelineCache" => pipeline::vkDestroyPipelineCache,
            "vkGetPipelineCacheData" => pipeline::vkGetPipelineCacheData,
            "vkMergePipelineCaches" => pipeline::vkMergePipelineCaches,
            "vkCreatePipelineLayout" => pipeline::vkCreatePipelineLayout,
            "vkDestroyPipelineLayout" => pipeline::vkDestroyPipelineLayout,
            "vkCreateComputePipelines" => pipeline::vkCreateComputePipelines,
            "vkCreateGraphicsPipelines" => pipeline::vkCreateGraphicsPipelines,
            "vkDestroyPipeline" => pipeline::vkDestroyPipeline,

            "vkCreateDescriptorSetLayout" => descriptor::vkCreateDescriptorSetLayout,
            "vkDestroyDescriptorSetLayout" => descriptor::vkDestroyDescriptorSetLayout,
            "vkGetDescriptorSetLayoutSupport" => descriptor::vkGetDescriptorSetLayoutSupport,
            "vkGetDescriptorSetLayoutSupportKHR" => descriptor::vkGetDescriptorSetLayoutSupport,
            "vkGetDescriptorSetLayoutSizeEXT" => descriptor::vkGetDescriptorSetLayoutSizeEXT,
            "vkGetDescriptorSetLayoutBindingOffsetEXT" => descriptor::vkGetDescriptorSetLayoutBindingOffsetEXT,
            "vkCreateDescriptorPool" => descriptor::vkCreateDescriptorPool,
            "vkDestroyDescriptorPool" => descriptor::vkDestroyDescriptorPool,
            "vkResetDescriptorPool" => descriptor::vkResetDescriptorPool,
            "vkAllocateDescriptorSets" => descriptor::vkAllocateDescriptorSets,
            "vkFreeDescriptorSets" => descriptor::vkFreeDescriptorSets,
            "vkUpdateDescriptorSets" => descriptor::vkUpdateDescriptorSets,
            "vkCreateDescriptorUpdateTemplate" => descriptor::vkCreateDescriptorUpdateTemplate,
            "vkCreateDescriptorUpdateTemplateKHR" => descriptor::vkCreateDescriptorUpdateTemplate,
            "vkDestroyDescriptorUpdateTemplate" => descriptor::vkDestroyDescriptorUpdateTemplate,
            "vkDestroyDescriptorUpdateTemplateKHR" => descriptor::vkDestroyDescriptorUpdateTemplate,
            "vkUpdateDescriptorSetWithTemplate" => descriptor::vkUpdateDescriptorSetWithTemplate,
            "vkUpdateDescriptorSetWithTemplateKHR" => descriptor::vkUpdateDescriptorSetWithTemplate,

            "vkCreateRenderPass" => renderpass::vkCreateRenderPass,
            "vkCreateRenderPass2" => renderpass::vkCreateRenderPass2,
            "vkCreateRenderPass2KHR" => renderpass::vkCreateRenderPass2,
            "vkDestroyRenderPass" => renderpass::vkDestroyRenderPass,
            "vkGetRenderAreaGranularity" => renderpass::vkGetRenderAreaGranularity,
            "vkCreateFramebuffer" => renderpass::vkCreateFramebuffer,
            "vkDestroyFramebuffer" => renderpass::vkDestroyFramebuffer,

            "vkCreateAccelerationStructureKHR" => acceleration::vkCreateAccelerationStructureKHR,
            "vkDestroyAccelerationStructureKHR" => acceleration::vkDestroyAccelerationStructureKHR,
            "vkGetAccelerationStructureBuildSizesKHR" => acceleration::vkGetAccelerationStructureBuildSizesKHR,
            "vkGetAccelerationStructureMemoryRequirementsNV" => acceleration::vkGetAccelerationStructureMemoryRequirementsNV,
            "vkGetAccelerationStructureDeviceAddressKHR" => acceleration::vkGetAccelerationStructureDeviceAddressKHR,
        }
    };
    DispatchTable { commands }
}
